use yolox_bbox_rs::parser::{
    BOX_FIELDS, RawTensor, clamp, decode, generate_anchors, sort_descending, suppress,
};
use yolox_bbox_rs::{DetectionParams, NetworkInfo, ParseError, Rect, YoloxParser, parse_detections};

const ROW: usize = BOX_FIELDS + 80;

fn set_anchor(tensor: &mut [f32], anchor: usize, fields: [f32; 5], class_id: usize, score: f32) {
    let base = anchor * ROW;
    tensor[base..base + BOX_FIELDS].copy_from_slice(&fields);
    tensor[base + BOX_FIELDS + class_id] = score;
}

#[test]
fn test_single_anchor_end_to_end() {
    let anchors = generate_anchors(640, &[8, 16, 32]);
    assert_eq!(anchors.len(), 8400);

    let mut data = vec![0.0; anchors.len() * ROW];
    set_anchor(&mut data, 0, [0.0, 0.0, 0.0, 0.0, 1.0], 0, 0.9);

    // Stage by stage
    let tensor = RawTensor::new(&data, anchors.len(), 80).unwrap();
    let candidates = decode(&anchors, &tensor, 0.3).unwrap();
    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].bbox, Rect::new(-4.0, -4.0, 8.0, 8.0));
    assert_eq!(candidates[0].class_id, 0);
    assert_eq!(candidates[0].confidence, 0.9);

    let sorted = sort_descending(candidates);
    assert_eq!(suppress(&sorted, 0.65), vec![0]);
    let detection = clamp(&sorted[0], 1920, 1080);
    assert_eq!(detection.bbox, Rect::new(0.0, 0.0, 4.0, 4.0));

    // In one call
    let detections =
        parse_detections(&data, &NetworkInfo::default(), &DetectionParams::default()).unwrap();
    assert_eq!(detections, vec![detection]);
}

#[test]
fn test_overlapping_anchors_suppressed() {
    let parser = YoloxParser::with_default_config().unwrap();
    let mut data = vec![0.0; parser.expected_tensor_len()];
    let log_8 = 8.0f32.ln();

    // Stride 8 anchors at grid (10, 10) and (11, 10): 64x64 boxes 8px apart.
    set_anchor(&mut data, 10 * 80 + 10, [0.0, 0.0, log_8, log_8, 1.0], 2, 0.8);
    set_anchor(&mut data, 10 * 80 + 11, [0.0, 0.0, log_8, log_8, 1.0], 5, 0.9);
    // Stride 16 anchor at grid (30, 30), far away from both.
    set_anchor(&mut data, 6400 + 30 * 40 + 30, [0.0, 0.0, 0.0, 0.0, 0.5], 1, 0.8);

    let detections = parser.parse(&data).unwrap();
    assert_eq!(detections.len(), 2);

    // Suppression is class-agnostic: the 0.9 box wins over the 0.8 box.
    assert_eq!(detections[0].class_id, 5);
    assert_eq!(detections[0].confidence, 0.9);
    assert!((detections[0].bbox.x - 56.0).abs() < 1e-3);
    assert!((detections[0].bbox.y - 48.0).abs() < 1e-3);
    assert!((detections[0].bbox.width - 64.0).abs() < 1e-3);

    assert_eq!(detections[1].class_id, 1);
    assert!((detections[1].confidence - 0.4).abs() < 1e-6);
    assert_eq!(detections[1].bbox, Rect::new(472.0, 472.0, 16.0, 16.0));
}

#[test]
fn test_detections_stay_inside_image() {
    let params = DetectionParams::default().with_image_size(320, 240);
    let parser = YoloxParser::new(NetworkInfo::default(), params).unwrap();
    let mut data = vec![0.0; parser.expected_tensor_len()];

    // Stride 32 anchor at grid (9, 7): a ~236px box centered on (304, 240),
    // reaching past the right and bottom edges.
    let anchor = 6400 + 1600 + 7 * 20 + 9;
    set_anchor(&mut data, anchor, [0.5, 0.5, 2.0, 2.0, 0.9], 79, 0.9);

    let detections = parser.parse(&data).unwrap();
    assert_eq!(detections.len(), 1);
    let [x1, y1, x2, y2] = detections[0].bbox.to_tlbr();
    assert!(x1 >= 0.0 && y1 >= 0.0);
    assert_eq!((x2, y2), (319.0, 239.0));
    assert!(x1 > 180.0 && y1 > 115.0);
    assert!(detections[0].bbox.width >= 0.0 && detections[0].bbox.height >= 0.0);

    let pixels = detections[0].quantized();
    assert!(pixels.left + pixels.width <= 319);
    assert!(pixels.top + pixels.height <= 239);
}

#[test]
fn test_parser_is_reusable_across_frames() {
    let parser = YoloxParser::with_default_config().unwrap();
    let mut frame_a = vec![0.0; parser.expected_tensor_len()];
    let frame_b = frame_a.clone();
    set_anchor(&mut frame_a, 42, [0.0, 0.0, 1.0, 1.0, 1.0], 3, 0.95);

    assert_eq!(parser.parse(&frame_a).unwrap().len(), 1);
    assert!(parser.parse(&frame_b).unwrap().is_empty());
    assert_eq!(parser.parse(&frame_a).unwrap().len(), 1);
}

#[test]
fn test_short_tensor_is_rejected() {
    let err = parse_detections(
        &[0.0; 1000],
        &NetworkInfo::default(),
        &DetectionParams::default(),
    )
    .unwrap_err();
    assert_eq!(
        err,
        ParseError::TensorTooShort {
            expected: 8400 * 85,
            actual: 1000
        }
    );
}
