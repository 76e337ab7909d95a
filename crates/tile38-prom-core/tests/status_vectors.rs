//! SERVER EXT reply vector tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use tile38_prom_core::render::format_sample;
use tile38_prom_core::stats::extract;
use tile38_prom_core::StatusDocument;


#[test]
fn status_vectors() {
    let files = [
        "status_ok.json",
        "status_no_stats.json",
        "status_stats_not_object.json",
        "status_backend_err.json",
        "status_missing_ok.json",
        "status_not_json.json",
        "status_not_object.json",
    ];

    for f in files {
        let v = vector_loader::load(f);
        let res = StatusDocument::from_reply(&v.reply);

        if let Some(err) = v.expect_error {
            let e = res.expect_err("expected error");
            assert_eq!(e.kind().as_str(), err.kind, "vector={}", v.description);
            if let Some(msg) = err.message {
                assert_eq!(e.to_string(), msg, "vector={}", v.description);
            }
            continue;
        }

        let doc = res.expect("expected ok document");
        let ex = v.expect.expect("missing expect block");

        assert_eq!(doc.stats().len(), ex.stats_len, "vector={}", v.description);
        assert!(!doc.stats().contains_key("elapsed"), "vector={}", v.description);
        for (key, want) in &ex.samples {
            let got = format_sample(extract(doc.stats(), key));
            assert_eq!(&got, want, "vector={} key={}", v.description, key);
        }
    }
}

#[test]
fn elapsed_is_stripped_from_top_level_only() {
    let doc = StatusDocument::from_reply(
        r#"{"ok":true,"elapsed":"1ms","stats":{"elapsed":3,"tile38_pid":9}}"#,
    )
    .unwrap();
    // A stat that happens to share the name survives.
    assert_eq!(extract(doc.stats(), "elapsed"), 3.0);
    assert_eq!(extract(doc.stats(), "tile38_pid"), 9.0);
}
