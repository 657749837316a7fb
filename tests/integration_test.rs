use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const DEFAULT_SIZES: [u32; 5] = [128, 96, 48, 32, 16];

fn run_glyph_icons(cwd: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_glyph-icons"))
        .current_dir(cwd)
        .args(args)
        .output()
        .expect("Failed to run glyph-icons command")
}

fn assert_success(output: &Output) {
    if !output.status.success() {
        eprintln!("Command failed with status: {}", output.status);
        eprintln!("stdout: {}", String::from_utf8_lossy(&output.stdout));
        eprintln!("stderr: {}", String::from_utf8_lossy(&output.stderr));
        panic!("glyph-icons command failed");
    }
}

/// Running without arguments writes the five default icons into ./icons
#[test]
fn test_default_run_writes_five_icons() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let output = run_glyph_icons(temp_dir.path(), &[]);
    assert_success(&output);

    let stdout = String::from_utf8_lossy(&output.stdout);
    let expected: Vec<String> = DEFAULT_SIZES
        .iter()
        .map(|size| format!("wrote icons/{size}.png"))
        .collect();
    assert_eq!(stdout.lines().collect::<Vec<_>>(), expected);

    let icons_dir = temp_dir.path().join("icons");
    assert_eq!(std::fs::read_dir(&icons_dir).unwrap().count(), 5);

    for size in DEFAULT_SIZES {
        let path = icons_dir.join(format!("{size}.png"));
        let icon = image::open(&path)
            .unwrap_or_else(|e| panic!("{} should decode: {e}", path.display()));
        assert_eq!(icon.width(), size, "width of {}", path.display());
        assert_eq!(icon.height(), size, "height of {}", path.display());
    }
}

#[test]
fn test_small_icon_pixels() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let output = run_glyph_icons(temp_dir.path(), &["--sizes", "16"]);
    assert_success(&output);

    let icon = image::open(temp_dir.path().join("icons").join("16.png"))
        .expect("Failed to load generated icon")
        .to_rgba8();

    assert_eq!(icon.get_pixel(0, 0).0, [39, 68, 164, 255]);
    // Left stroke edge is foreground; the center sits in the glyph's drop shadow.
    assert_eq!(icon.get_pixel(3, 8).0, [250, 252, 255, 255]);
    assert_eq!(icon.get_pixel(7, 7).0, [12, 26, 64, 160]);
}

#[test]
fn test_custom_output_and_sizes() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let output = run_glyph_icons(temp_dir.path(), &["-o", "out/app", "-s", "1,24"]);
    assert_success(&output);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout.lines().collect::<Vec<_>>(),
        ["wrote out/app/1.png", "wrote out/app/24.png"]
    );

    let single = image::open(temp_dir.path().join("out/app/1.png"))
        .expect("Failed to load 1px icon")
        .to_rgba8();
    assert_eq!(single.dimensions(), (1, 1));
    assert_eq!(single.get_pixel(0, 0).0, [34, 58, 148, 255]);
}

#[test]
fn test_zero_size_is_rejected() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let output = run_glyph_icons(temp_dir.path(), &["--sizes", "16,0"]);

    assert!(!output.status.success());
    assert!(!temp_dir.path().join("icons").exists());
}

#[test]
fn test_unwritable_output_exits_non_zero() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    std::fs::write(temp_dir.path().join("icons"), b"occupied").unwrap();

    let output = run_glyph_icons(temp_dir.path(), &[]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Can't create output directory"));
}
