use image::{GrayImage, Luma, Rgb};
use picross::{load_binary, open_image, Cell, Clues, Generator, PicrossError, DEFAULT_THRESHOLD};

/// 5x4 "T" shape: a full top bar and a two-wide stem.
fn t_shape() -> GrayImage {
    GrayImage::from_fn(5, 4, |x, y| {
        let black = y == 0 || (1..3).contains(&x);
        Luma([if black { 10 } else { 240 }])
    })
}

#[test]
fn file_to_sheet_and_clues() {
    let _ = env_logger::builder().is_test(true).try_init();
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("t.png");
    t_shape().save(&input).unwrap();

    let binary = load_binary(&input, DEFAULT_THRESHOLD).unwrap();
    assert_eq!((binary.width(), binary.height()), (5, 4));
    assert_eq!(binary.get(0, 0), Cell::Black);
    assert_eq!(binary.get(0, 1), Cell::White);

    let puzzle = Generator::new().generate(&open_image(&input).unwrap()).unwrap();
    assert_eq!(puzzle.binary, binary);
    assert_eq!(puzzle.clues.rows, vec![vec![5], vec![2], vec![2], vec![2]]);
    assert_eq!(puzzle.clues.columns, vec![vec![1], vec![4], vec![4], vec![1], vec![1]]);

    let sheet_path = dir.path().join("picross.png");
    let clues_path = dir.path().join("clues.json");
    puzzle.save(&sheet_path).unwrap();
    puzzle.write_clues(&clues_path).unwrap();

    let sheet = image::open(&sheet_path).unwrap().to_rgb8();
    assert_eq!(sheet.dimensions(), (5 * 30 + 200, 4 * 30 + 200));
    // grid corner at the default offset: 320 * 3 / 20
    assert_eq!(*sheet.get_pixel(48, 48), Rgb([0, 0, 0]));

    let read: Clues = serde_json::from_reader(std::fs::File::open(&clues_path).unwrap()).unwrap();
    assert_eq!(read, puzzle.clues);
}

#[test]
fn rendering_twice_gives_identical_sheets() {
    let image = image::DynamicImage::ImageLuma8(t_shape());
    let a = Generator::new().generate(&image).unwrap();
    let b = Generator::new().generate(&image).unwrap();
    assert_eq!(a.sheet, b.sheet);
}

#[test]
fn unreadable_input_is_a_load_error() {
    let dir = tempfile::tempdir().unwrap();
    let garbage = dir.path().join("garbage.png");
    std::fs::write(&garbage, b"definitely not a png").unwrap();

    let err = open_image(&garbage).err().unwrap();
    assert!(matches!(err, PicrossError::Load { .. }));
    assert!(err.to_string().contains("garbage.png"));

    let missing = dir.path().join("missing.png");
    assert!(matches!(load_binary(&missing, DEFAULT_THRESHOLD), Err(PicrossError::Load { .. })));
}
