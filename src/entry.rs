//! The fixed-width dictionary record.
//!
//! Every row of the output table has the same 19 columns in the same order.
//! The order is part of the contract: the header row is built from it, and
//! reference resolution copies a contiguous run of [`SIDE_WIDTH`] columns
//! starting at a headword, which only works because each language's paired
//! columns sit next to each other.

use serde::Serialize;

/// Number of columns in every row.
pub const FIELD_COUNT: usize = 19;

/// Columns per language block: headword, gloss, sub-gloss, grammar, genus.
pub const SIDE_WIDTH: usize = 5;

/// Marks a headword that redirects to another entry ("see word X").
pub const REFERENCE_MARKER: &str = "cf.";

/// One column of the output table, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    DStichwort,
    DSemantik,
    DSubsemantik,
    DGrammatik,
    DGenus,
    RStichwort,
    RSemantik,
    RSubsemantik,
    RGrammatik,
    RGenus,
    Bearbeitungshinweis,
    RedirectA,
    RedirectB,
    MaalrComment,
    MaalrEmail,
    Infinitiv,
    Type,
    Subtype,
    Irregular,
}

static ORDER: [Field; FIELD_COUNT] = Field::ALL;

impl Field {
    pub const ALL: [Field; FIELD_COUNT] = [
        Field::DStichwort,
        Field::DSemantik,
        Field::DSubsemantik,
        Field::DGrammatik,
        Field::DGenus,
        Field::RStichwort,
        Field::RSemantik,
        Field::RSubsemantik,
        Field::RGrammatik,
        Field::RGenus,
        Field::Bearbeitungshinweis,
        Field::RedirectA,
        Field::RedirectB,
        Field::MaalrComment,
        Field::MaalrEmail,
        Field::Infinitiv,
        Field::Type,
        Field::Subtype,
        Field::Irregular,
    ];

    /// Column position in the output row.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Column name as written in the header row.
    pub const fn name(self) -> &'static str {
        match self {
            Field::DStichwort => "DStichwort",
            Field::DSemantik => "DSemantik",
            Field::DSubsemantik => "DSubsemantik",
            Field::DGrammatik => "DGrammatik",
            Field::DGenus => "DGenus",
            Field::RStichwort => "RStichwort",
            Field::RSemantik => "RSemantik",
            Field::RSubsemantik => "RSubsemantik",
            Field::RGrammatik => "RGrammatik",
            Field::RGenus => "RGenus",
            Field::Bearbeitungshinweis => "Bearbeitungshinweis",
            Field::RedirectA => "redirect_a",
            Field::RedirectB => "redirect_b",
            Field::MaalrComment => "maalr_comment",
            Field::MaalrEmail => "maalr_email",
            Field::Infinitiv => "infinitiv",
            Field::Type => "type",
            Field::Subtype => "subtype",
            Field::Irregular => "irregular",
        }
    }
}

/// Which language a block of columns belongs to.
///
/// `Source` is the `D*` block (German), `Target` the `R*` block (Romansh).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Source,
    Target,
}

impl Side {
    pub const fn opposite(self) -> Side {
        match self {
            Side::Source => Side::Target,
            Side::Target => Side::Source,
        }
    }

    pub const fn headword(self) -> Field {
        match self {
            Side::Source => Field::DStichwort,
            Side::Target => Field::RStichwort,
        }
    }

    pub const fn semantik(self) -> Field {
        match self {
            Side::Source => Field::DSemantik,
            Side::Target => Field::RSemantik,
        }
    }

    pub const fn subsemantik(self) -> Field {
        match self {
            Side::Source => Field::DSubsemantik,
            Side::Target => Field::RSubsemantik,
        }
    }

    pub const fn grammatik(self) -> Field {
        match self {
            Side::Source => Field::DGrammatik,
            Side::Target => Field::RGrammatik,
        }
    }

    pub const fn genus(self) -> Field {
        match self {
            Side::Source => Field::DGenus,
            Side::Target => Field::RGenus,
        }
    }

    /// The contiguous run of columns starting at this side's headword.
    pub fn fields(self) -> &'static [Field] {
        let start = self.headword().index();
        &ORDER[start..start + SIDE_WIDTH]
    }
}

/// One row of the output table. Absent values are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Entry {
    #[serde(rename = "DStichwort")]
    pub d_stichwort: String,
    #[serde(rename = "DSemantik")]
    pub d_semantik: String,
    #[serde(rename = "DSubsemantik")]
    pub d_subsemantik: String,
    #[serde(rename = "DGrammatik")]
    pub d_grammatik: String,
    #[serde(rename = "DGenus")]
    pub d_genus: String,
    #[serde(rename = "RStichwort")]
    pub r_stichwort: String,
    #[serde(rename = "RSemantik")]
    pub r_semantik: String,
    #[serde(rename = "RSubsemantik")]
    pub r_subsemantik: String,
    #[serde(rename = "RGrammatik")]
    pub r_grammatik: String,
    #[serde(rename = "RGenus")]
    pub r_genus: String,
    /// Processing note: the offending line when the parse was ambiguous.
    #[serde(rename = "Bearbeitungshinweis")]
    pub bearbeitungshinweis: String,

    // Reserved for the dictionary platform; never filled here.
    pub redirect_a: String,
    pub redirect_b: String,
    pub maalr_comment: String,
    pub maalr_email: String,
    pub infinitiv: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub subtype: String,
    pub irregular: String,
}

impl Entry {
    /// The synthetic first row: every column holds its own name.
    pub fn header() -> Self {
        let mut entry = Entry::default();
        for field in Field::ALL {
            entry.set(field, field.name());
        }
        entry
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::DStichwort => &self.d_stichwort,
            Field::DSemantik => &self.d_semantik,
            Field::DSubsemantik => &self.d_subsemantik,
            Field::DGrammatik => &self.d_grammatik,
            Field::DGenus => &self.d_genus,
            Field::RStichwort => &self.r_stichwort,
            Field::RSemantik => &self.r_semantik,
            Field::RSubsemantik => &self.r_subsemantik,
            Field::RGrammatik => &self.r_grammatik,
            Field::RGenus => &self.r_genus,
            Field::Bearbeitungshinweis => &self.bearbeitungshinweis,
            Field::RedirectA => &self.redirect_a,
            Field::RedirectB => &self.redirect_b,
            Field::MaalrComment => &self.maalr_comment,
            Field::MaalrEmail => &self.maalr_email,
            Field::Infinitiv => &self.infinitiv,
            Field::Type => &self.kind,
            Field::Subtype => &self.subtype,
            Field::Irregular => &self.irregular,
        }
    }

    pub fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::DStichwort => &mut self.d_stichwort,
            Field::DSemantik => &mut self.d_semantik,
            Field::DSubsemantik => &mut self.d_subsemantik,
            Field::DGrammatik => &mut self.d_grammatik,
            Field::DGenus => &mut self.d_genus,
            Field::RStichwort => &mut self.r_stichwort,
            Field::RSemantik => &mut self.r_semantik,
            Field::RSubsemantik => &mut self.r_subsemantik,
            Field::RGrammatik => &mut self.r_grammatik,
            Field::RGenus => &mut self.r_genus,
            Field::Bearbeitungshinweis => &mut self.bearbeitungshinweis,
            Field::RedirectA => &mut self.redirect_a,
            Field::RedirectB => &mut self.redirect_b,
            Field::MaalrComment => &mut self.maalr_comment,
            Field::MaalrEmail => &mut self.maalr_email,
            Field::Infinitiv => &mut self.infinitiv,
            Field::Type => &mut self.kind,
            Field::Subtype => &mut self.subtype,
            Field::Irregular => &mut self.irregular,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        *self.get_mut(field) = value.into();
    }

    /// Column values in output order.
    pub fn values(&self) -> impl Iterator<Item = &str> + '_ {
        ORDER.iter().map(move |field| self.get(*field))
    }

    /// True if any column still carries a cross-reference marker.
    pub fn has_reference(&self) -> bool {
        self.values().any(|value| value.contains(REFERENCE_MARKER))
    }

    /// Overwrites this entry's `side` block with the same block of `other`.
    pub fn copy_side_from(&mut self, side: Side, other: &Entry) {
        for field in side.fields() {
            self.set(*field, other.get(*field));
        }
    }
}
