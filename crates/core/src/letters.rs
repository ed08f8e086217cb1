//! Closed enumeration of the letter types the portal can issue.
//!
//! The per-type extra-variable lists in [`crate::catalog`] are keyed by this
//! enum rather than by free-form strings, so an unknown type cannot reach the
//! catalog compiler at all. String codes exist only at the serialization
//! boundary (persisted letter records, request payloads).

use serde::{Deserialize, Serialize};

/// A kind of official letter issued by the village administration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LetterType {
    /// Surat keterangan domisili (residency statement).
    KeteranganDomisili,
    /// Surat keterangan usaha (business statement).
    KeteranganUsaha,
    /// Surat keterangan tidak mampu (financial hardship statement).
    KeteranganTidakMampu,
    /// Surat pengantar SKCK (police-record cover letter).
    PengantarSkck,
    /// Surat keterangan kelahiran (birth statement).
    KeteranganKelahiran,
    /// Surat keterangan kematian (death statement).
    KeteranganKematian,
}

impl LetterType {
    /// Every letter type, in catalog display order.
    pub const ALL: [LetterType; 6] = [
        LetterType::KeteranganDomisili,
        LetterType::KeteranganUsaha,
        LetterType::KeteranganTidakMampu,
        LetterType::PengantarSkck,
        LetterType::KeteranganKelahiran,
        LetterType::KeteranganKematian,
    ];

    /// Stable string code used in persisted records and payloads.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            LetterType::KeteranganDomisili => "keterangan_domisili",
            LetterType::KeteranganUsaha => "keterangan_usaha",
            LetterType::KeteranganTidakMampu => "keterangan_tidak_mampu",
            LetterType::PengantarSkck => "pengantar_skck",
            LetterType::KeteranganKelahiran => "keterangan_kelahiran",
            LetterType::KeteranganKematian => "keterangan_kematian",
        }
    }

    /// Human-readable name as printed on the letter head.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            LetterType::KeteranganDomisili => "Surat Keterangan Domisili",
            LetterType::KeteranganUsaha => "Surat Keterangan Usaha",
            LetterType::KeteranganTidakMampu => "Surat Keterangan Tidak Mampu",
            LetterType::PengantarSkck => "Surat Pengantar SKCK",
            LetterType::KeteranganKelahiran => "Surat Keterangan Kelahiran",
            LetterType::KeteranganKematian => "Surat Keterangan Kematian",
        }
    }

    /// Parse a string code, case-insensitively. Unknown codes are `None`,
    /// never an error.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim().to_lowercase();
        Self::ALL.into_iter().find(|t| t.code() == code)
    }
}
