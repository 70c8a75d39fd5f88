//! Pipeline behavior: partial emission, cancellation, fallbacks, retry,
//! option handling, and the wire envelope.
//!
//! Run with: cargo test --test pipeline_behavior


use std::cell::RefCell;

use hueforge_engine::capabilities::{CancelToken, SegmentOut};
use hueforge_engine::segmentation::SegmentationMethod;
use hueforge_engine::{ExtractHooks, ExtractOptions, ExtractionError, Extractor};
use hueforge_palette::extracted::Segment;
use stubs::{encode_gray, encode_image, fast_config, StubDecoder, StubProvider};

/// An image with eight well-separated saturated tiles, so extractions
/// yield a rich palette.
fn colorful_image() -> Vec<u8> {
    const TILES: [[u8; 3]; 8] = [
        [220, 30, 30],
        [230, 140, 30],
        [200, 200, 40],
        [40, 180, 60],
        [30, 170, 170],
        [40, 70, 210],
        [130, 40, 190],
        [200, 50, 150],
    ];
    encode_image(160, 100, |x, _| TILES[(x / 20) as usize])
}

#[test]
fn partial_hook_fires_once_at_threshold() {
    let image = colorful_image();
    let provider = StubProvider::empty();
    let decoder = StubDecoder;
    let extractor = Extractor::with_config(&provider, &decoder, fast_config());

    let calls = RefCell::new(Vec::<usize>::new());
    let mut hooks = ExtractHooks::with_partial(|prefix| {
        calls.borrow_mut().push(prefix.len());
    });

    let result = extractor
        .extract(
            &image,
            "colorful.png",
            &ExtractOptions {
                num_colors: Some(12),
                ..ExtractOptions::default()
            },
            &mut hooks,
            &CancelToken::new(),
        )
        .unwrap();

    drop(hooks);
    let calls = calls.into_inner();
    assert_eq!(calls.len(), 1, "hook must fire exactly once");
    if result.palette.len() >= 5 {
        assert_eq!(calls[0], 5, "threshold emission carries the 5-prefix");
    } else {
        assert_eq!(calls[0], result.palette.len());
    }
}

#[test]
fn partial_hook_fires_with_whole_palette_below_threshold() {
    // Two-color image: the palette stays under the partial threshold
    let image = encode_image(60, 60, |x, _| if x < 30 { [220, 30, 30] } else { [30, 30, 220] });
    let provider = StubProvider::empty();
    let decoder = StubDecoder;
    let extractor = Extractor::with_config(&provider, &decoder, fast_config());

    let calls = RefCell::new(Vec::<usize>::new());
    let mut hooks = ExtractHooks::with_partial(|prefix| {
        calls.borrow_mut().push(prefix.len());
    });

    let result = extractor
        .extract(
            &image,
            "duo.png",
            &ExtractOptions {
                num_colors: Some(4),
                ..ExtractOptions::default()
            },
            &mut hooks,
            &CancelToken::new(),
        )
        .unwrap();

    drop(hooks);
    let calls = calls.into_inner();
    assert!(result.palette.len() < 5);
    assert_eq!(calls, vec![result.palette.len()]);
}

#[test]
fn cancellation_before_start_emits_nothing() {
    let image = colorful_image();
    let provider = StubProvider::empty();
    let decoder = StubDecoder;
    let extractor = Extractor::with_config(&provider, &decoder, fast_config());

    let cancel = CancelToken::new();
    cancel.cancel();

    let fired = RefCell::new(false);
    let mut hooks = ExtractHooks::with_partial(|_| {
        *fired.borrow_mut() = true;
    });

    let result = extractor.extract(
        &image,
        "cancelled.png",
        &ExtractOptions::default(),
        &mut hooks,
        &cancel,
    );

    assert!(matches!(result, Err(ExtractionError::Cancelled)));
    assert!(!*fired.borrow(), "no partial may be emitted after cancel");
}

#[test]
fn panoptic_failure_after_retry_falls_back() {
    let image = colorful_image();
    let provider = StubProvider {
        panoptic_failures: std::cell::Cell::new(2),
        ..StubProvider::empty()
    };
    let decoder = StubDecoder;
    let extractor = Extractor::with_config(&provider, &decoder, fast_config());

    let result = extractor
        .extract(
            &image,
            "offline.png",
            &ExtractOptions::default(),
            &mut ExtractHooks::none(),
            &CancelToken::new(),
        )
        .unwrap();

    assert_eq!(provider.panoptic_calls.get(), 2, "one call plus one retry");
    assert!(result.metadata.segmentation_quality.used_fallback);
    assert_eq!(
        result.segments.method,
        SegmentationMethod::FallbackLuminance
    );
}

#[test]
fn panoptic_retry_recovers() {
    let image = colorful_image();
    let mask = encode_gray(160, 100, |x, _| if x < 80 { 255 } else { 0 });
    let provider = StubProvider {
        panoptic_segments: vec![SegmentOut {
            label: "dog".into(),
            score: 0.85,
            mask: Some(mask),
        }],
        panoptic_failures: std::cell::Cell::new(1),
        ..StubProvider::empty()
    };
    let decoder = StubDecoder;
    let extractor = Extractor::with_config(&provider, &decoder, fast_config());

    let result = extractor
        .extract(
            &image,
            "flaky.png",
            &ExtractOptions::default(),
            &mut ExtractHooks::none(),
            &CancelToken::new(),
        )
        .unwrap();

    assert_eq!(provider.panoptic_calls.get(), 2);
    assert!(!result.metadata.segmentation_quality.used_fallback);
    assert_eq!(result.segments.method, SegmentationMethod::Panoptic);
}

#[test]
fn broken_segment_mask_is_skipped_not_fatal() {
    let image = colorful_image();
    let good_mask = encode_gray(160, 100, |x, _| if x < 40 { 255 } else { 0 });
    let provider = StubProvider::with_segments(vec![
        SegmentOut {
            label: "cat".into(),
            score: 0.9,
            mask: Some(vec![0xde, 0xad, 0xbe, 0xef]),
        },
        SegmentOut {
            label: "dog".into(),
            score: 0.8,
            mask: Some(good_mask),
        },
    ]);
    let decoder = StubDecoder;
    let extractor = Extractor::with_config(&provider, &decoder, fast_config());

    let result = extractor
        .extract(
            &image,
            "broken-mask.png",
            &ExtractOptions::default(),
            &mut ExtractHooks::none(),
            &CancelToken::new(),
        )
        .unwrap();

    // The good mask still produced a panoptic result
    assert_eq!(result.segments.method, SegmentationMethod::Panoptic);
    assert!((result.segments.foreground_pct - 25.0).abs() < 2.0);
}

#[test]
fn include_background_false_keeps_foreground_only() {
    let image = encode_image(60, 60, |x, _| if x < 30 { [220, 30, 30] } else { [30, 30, 220] });
    let mask = encode_gray(60, 60, |x, _| if x < 30 { 255 } else { 0 });
    let provider = StubProvider::with_segments(vec![SegmentOut {
        label: "person".into(),
        score: 0.9,
        mask: Some(mask),
    }]);
    let decoder = StubDecoder;
    let extractor = Extractor::with_config(&provider, &decoder, fast_config());

    let result = extractor
        .extract(
            &image,
            "fg-only.png",
            &ExtractOptions {
                include_background: false,
                ..ExtractOptions::default()
            },
            &mut ExtractHooks::none(),
            &CancelToken::new(),
        )
        .unwrap();

    assert!(!result.palette.is_empty());
    for color in &result.palette {
        assert_eq!(color.source.segment, Segment::Foreground);
    }
}

#[test]
fn harmonies_can_be_disabled() {
    let image = colorful_image();
    let provider = StubProvider::empty();
    let decoder = StubDecoder;
    let extractor = Extractor::with_config(&provider, &decoder, fast_config());

    let result = extractor
        .extract(
            &image,
            "no-harmony.png",
            &ExtractOptions {
                generate_harmonies: false,
                ..ExtractOptions::default()
            },
            &mut ExtractHooks::none(),
            &CancelToken::new(),
        )
        .unwrap();

    for color in &result.palette {
        assert!(color.harmony.is_none());
    }
}

#[test]
fn invalid_image_bytes_error() {
    let provider = StubProvider::empty();
    let decoder = StubDecoder;
    let extractor = Extractor::with_config(&provider, &decoder, fast_config());

    let result = extractor.extract(
        b"not an image",
        "junk.bin",
        &ExtractOptions::default(),
        &mut ExtractHooks::none(),
        &CancelToken::new(),
    );

    assert!(matches!(result, Err(ExtractionError::InvalidImage(_))));
}

#[test]
fn semantic_categories_flow_into_result() {
    let image = colorful_image();
    let provider = StubProvider {
        semantic_labels: vec!["beach".into(), "sky".into(), "Beach".into()],
        ..StubProvider::empty()
    };
    let decoder = StubDecoder;
    let extractor = Extractor::with_config(&provider, &decoder, fast_config());

    let result = extractor
        .extract(
            &image,
            "categories.png",
            &ExtractOptions::default(),
            &mut ExtractHooks::none(),
            &CancelToken::new(),
        )
        .unwrap();

    // Case-insensitive dedup preserves first-seen order
    assert_eq!(result.segments.categories, vec!["beach", "sky"]);
}

#[test]
fn result_envelope_serializes() {
    let image = colorful_image();
    let provider = StubProvider::empty();
    let decoder = StubDecoder;
    let extractor = Extractor::with_config(&provider, &decoder, fast_config());

    let result = extractor
        .extract(
            &image,
            "envelope.png",
            &ExtractOptions::default(),
            &mut ExtractHooks::none(),
            &CancelToken::new(),
        )
        .unwrap();

    let json = serde_json::to_value(&result).unwrap();
    assert!(json["id"].as_str().unwrap().starts_with("palette_"));
    assert_eq!(json["source_image"]["filename"], "envelope.png");
    assert_eq!(json["source_image"]["dimensions"]["width"], 160);
    assert!(json["palette"].as_array().unwrap().len() >= 2);
    assert!(json["exports"]["css_variables"]
        .as_str()
        .unwrap()
        .starts_with(":root"));
    assert!(json["metadata"]["color_diversity"].is_number());
    assert_eq!(json["palette"][0]["id"], "color_001");
}
