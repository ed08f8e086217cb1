//! The fixed variable definition lists, one per category.
//!
//! Pure data. Each function returns a fresh list; the contents never change
//! at runtime. Duplicate names within one list are a build defect and are
//! guarded by tests, not by runtime checks.

use super::types::{VariableCategory, VariableDefinition};
use crate::letters::LetterType;

fn org(name: &str, label: &str, description: &str) -> VariableDefinition {
    VariableDefinition::new(name, label, description, VariableCategory::Organization)
}

fn applicant(name: &str, label: &str, description: &str) -> VariableDefinition {
    VariableDefinition::new(name, label, description, VariableCategory::Applicant)
}

fn specific(name: &str, label: &str, description: &str) -> VariableDefinition {
    VariableDefinition::new(name, label, description, VariableCategory::LetterSpecific)
}

/// Organization-level variables, available in every letter type.
#[must_use]
pub fn common_definitions() -> Vec<VariableDefinition> {
    vec![
        org("desa.nama", "Nama Desa", "Nama desa yang menerbitkan surat"),
        org("desa.alamat", "Alamat Kantor Desa", "Alamat lengkap kantor desa"),
        org("desa.kecamatan", "Kecamatan", "Kecamatan tempat desa berada"),
        org("desa.kabupaten", "Kabupaten", "Kabupaten tempat desa berada"),
        org(
            "kepalaDesa.nama",
            "Nama Kepala Desa",
            "Nama lengkap kepala desa yang menandatangani surat",
        ),
        org(
            "kepalaDesa.jabatan",
            "Jabatan Penandatangan",
            "Jabatan pejabat penandatangan surat",
        ),
        org("surat.nomor", "Nomor Surat", "Nomor administrasi surat"),
        org("tanggalSurat", "Tanggal Surat", "Tanggal surat diterbitkan"),
    ]
}

/// Applicant-level variables, available in every letter type.
#[must_use]
pub fn applicant_definitions() -> Vec<VariableDefinition> {
    vec![
        applicant(
            "pemohon.namaLengkap",
            "Nama Lengkap",
            "Nama lengkap pemohon sesuai KTP",
        ),
        applicant("pemohon.nik", "NIK", "Nomor induk kependudukan pemohon"),
        applicant("pemohon.tempatLahir", "Tempat Lahir", "Tempat lahir pemohon"),
        applicant(
            "pemohon.tanggalLahir",
            "Tanggal Lahir",
            "Tanggal lahir pemohon",
        ),
        applicant(
            "pemohon.jenisKelamin",
            "Jenis Kelamin",
            "Jenis kelamin pemohon",
        ),
        applicant("pemohon.agama", "Agama", "Agama pemohon"),
        applicant("pemohon.pekerjaan", "Pekerjaan", "Pekerjaan pemohon"),
        applicant(
            "pemohon.statusPerkawinan",
            "Status Perkawinan",
            "Status perkawinan pemohon",
        ),
        applicant("pemohon.alamat", "Alamat", "Alamat pemohon sesuai KTP"),
        applicant(
            "pemohon.kewarganegaraan",
            "Kewarganegaraan",
            "Kewarganegaraan pemohon",
        ),
    ]
}

/// Letter-specific variables for one letter type.
///
/// Types with no extra facts return an empty list; that is an expected
/// outcome, never an error.
#[must_use]
pub fn letter_definitions(letter_type: LetterType) -> Vec<VariableDefinition> {
    match letter_type {
        LetterType::KeteranganDomisili => vec![
            specific(
                "domisili.statusKependudukan",
                "Status Kependudukan",
                "Status kependudukan yang diterangkan, mis. penduduk_dalam_desa",
            ),
            specific(
                "domisili.lamaTinggal",
                "Lama Tinggal",
                "Lama pemohon bertempat tinggal di alamat tersebut",
            ),
            specific(
                "domisili.keperluan",
                "Keperluan",
                "Keperluan penerbitan surat domisili",
            ),
            // Shadows the applicant entry: the domisili letter states the
            // address being certified, not the KTP address.
            specific(
                "pemohon.alamat",
                "Alamat Domisili",
                "Alamat tempat tinggal yang diterangkan berdomisili",
            ),
        ],
        LetterType::KeteranganUsaha => vec![
            specific("usaha.nama", "Nama Usaha", "Nama usaha milik pemohon"),
            specific("usaha.jenis", "Jenis Usaha", "Bidang atau jenis usaha"),
            specific("usaha.alamat", "Alamat Usaha", "Alamat tempat usaha"),
            specific(
                "usaha.tahunBerdiri",
                "Tahun Berdiri",
                "Tahun usaha mulai berjalan",
            ),
        ],
        LetterType::KeteranganTidakMampu => vec![
            specific(
                "keterangan.penghasilanBulanan",
                "Penghasilan Bulanan",
                "Perkiraan penghasilan bulanan pemohon",
            ),
            specific(
                "keterangan.jumlahTanggungan",
                "Jumlah Tanggungan",
                "Jumlah anggota keluarga yang menjadi tanggungan",
            ),
            specific(
                "keterangan.keperluan",
                "Keperluan",
                "Keperluan penerbitan surat keterangan tidak mampu",
            ),
        ],
        LetterType::PengantarSkck => vec![],
        LetterType::KeteranganKelahiran => vec![
            specific("bayi.nama", "Nama Bayi", "Nama anak yang dilahirkan"),
            specific(
                "bayi.tanggalLahir",
                "Tanggal Lahir Bayi",
                "Tanggal kelahiran anak",
            ),
            specific(
                "bayi.tempatLahir",
                "Tempat Lahir Bayi",
                "Tempat kelahiran anak",
            ),
            specific(
                "bayi.jenisKelamin",
                "Jenis Kelamin Bayi",
                "Jenis kelamin anak",
            ),
        ],
        LetterType::KeteranganKematian => vec![
            specific("almarhum.nama", "Nama Almarhum", "Nama lengkap yang meninggal"),
            specific(
                "almarhum.tanggalMeninggal",
                "Tanggal Meninggal",
                "Tanggal kematian",
            ),
            specific(
                "almarhum.tempatMeninggal",
                "Tempat Meninggal",
                "Tempat kematian",
            ),
        ],
    }
}
