//! End-to-end flow: an imported template is normalized, then merged with a
//! record-layer context, the way the issuing application drives the core.

use chrono::NaiveDate;
use suratmerge_core::content::{ContentTree, Node};
use suratmerge_core::import::normalize;
use suratmerge_core::merge::{ContextValue, MergeOptions, OutputMode, merge};

/// A domisili letter as the upload pipeline hands it over: marker text still
/// literal inside the converted tree.
fn imported_letter() -> ContentTree {
    ContentTree::new(vec![
        Node::Heading { level: 1, content: vec![Node::text("SURAT KETERANGAN DOMISILI")] },
        Node::paragraph(vec![Node::text(
            "Yang bertanda tangan di bawah ini, Kepala Desa {{desa.nama}}, \
             menerangkan bahwa:",
        )]),
        Node::paragraph(vec![
            Node::text("Nama: "),
            Node::Strong { content: vec![Node::text("{{pemohon.namaLengkap}}")] },
            Node::HardBreak,
            Node::text("NIK: {{pemohon.nik}}"),
            Node::HardBreak,
            Node::text("Status: {{domisili.statusKependudukan}}"),
        ]),
        Node::paragraph(vec![Node::text(
            "benar berdomisili di {{pemohon.alamat}} sejak {{domisili.lamaTinggal}}.",
        )]),
        Node::paragraph(vec![Node::text("Diterbitkan pada {{tanggalSurat}}.")]),
    ])
}

fn record_context() -> ContextValue {
    ContextValue::object([
        ("desa", ContextValue::object([("nama", ContextValue::from("Sukamaju"))])),
        (
            "pemohon",
            ContextValue::object([
                ("namaLengkap", ContextValue::from("Siti Aminah")),
                ("nik", ContextValue::from("3201014509850002")),
                ("alamat", ContextValue::from("Dusun Krajan RT 03 RW 01")),
            ]),
        ),
        (
            "domisili",
            ContextValue::object([
                ("statusKependudukan", ContextValue::from("penduduk_dalam_desa")),
                ("lamaTinggal", ContextValue::from("12 tahun")),
            ]),
        ),
        (
            "tanggalSurat",
            ContextValue::Date(NaiveDate::from_ymd_opt(2025, 11, 18).unwrap()),
        ),
    ])
}

#[test]
fn import_then_merge_produces_the_final_letter() {
    let outcome = normalize(&imported_letter());
    assert_eq!(outcome.placeholder_count, 7);

    let options = MergeOptions { output_mode: OutputMode::Text, ..MergeOptions::default() };
    let result = merge(&outcome.tree, &record_context(), &options).unwrap();

    assert!(result.unresolved.is_empty());
    assert!(result.type_errors.is_empty());
    insta::assert_snapshot!(result.output.to_plain_text(), @r"
    SURAT KETERANGAN DOMISILI
    Yang bertanda tangan di bawah ini, Kepala Desa Sukamaju, menerangkan bahwa:
    Nama: Siti Aminah
    NIK: 3201014509850002
    Status: PENDUDUK DALAM DESA
    benar berdomisili di Dusun Krajan RT 03 RW 01 sejak 12 tahun.
    Diterbitkan pada 18 November 2025.
    ");
}

#[test]
fn merged_tree_keeps_formatting_wrappers() {
    let outcome = normalize(&imported_letter());
    let result =
        merge(&outcome.tree, &record_context(), &MergeOptions::default()).unwrap();

    let tree = match result.output {
        suratmerge_core::merge::MergeOutput::Tree(tree) => tree,
        suratmerge_core::merge::MergeOutput::Text(_) => unreachable!("default mode is tree"),
    };

    // The bold wrapper around the applicant name survives the merge with the
    // resolved text inside it.
    let data_block = tree.content[2].children().unwrap();
    assert_eq!(
        data_block[1],
        Node::Strong { content: vec![Node::text("Siti Aminah")] }
    );
}

#[test]
fn unresolved_names_block_nothing_but_are_reported() {
    // Issuing with an incomplete record set is a policy decision for the
    // caller; the engine completes the merge and reports what was missing.
    let outcome = normalize(&imported_letter());
    let partial = ContextValue::object([(
        "pemohon",
        ContextValue::object([("namaLengkap", ContextValue::from("Siti Aminah"))]),
    )]);

    let result = merge(&outcome.tree, &partial, &MergeOptions::default()).unwrap();

    assert_eq!(
        result.unresolved,
        vec![
            "desa.nama",
            "pemohon.nik",
            "domisili.statusKependudukan",
            "pemohon.alamat",
            "domisili.lamaTinggal",
            "tanggalSurat",
        ]
    );
}
