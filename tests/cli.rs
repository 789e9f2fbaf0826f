use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn plotcanvas_cmd(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("plotcanvas").expect("binary exists");
    cmd.env("XDG_CONFIG_HOME", config_home.path());
    cmd
}

#[test]
fn plotcanvas_help_prints_usage() {
    let temp = TempDir::new().unwrap();
    plotcanvas_cmd(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Render canvas drawing primitives to a PNG image",
        ));
}

#[test]
fn output_is_required() {
    let temp = TempDir::new().unwrap();
    plotcanvas_cmd(&temp)
        .arg("--grid")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "required arguments were not provided",
        ));
}

#[test]
fn renders_grid_at_requested_size() {
    let temp = TempDir::new().unwrap();
    let output = temp.path().join("grid.png");

    plotcanvas_cmd(&temp)
        .args(["--grid", "--width", "200", "--height", "100", "--output"])
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote"));

    let png = image::open(&output).unwrap().into_rgba8();
    assert_eq!(png.dimensions(), (200, 100));
    // Top-left corner is touched by the first horizontal and vertical grid lines
    assert_ne!(png.get_pixel(0, 0).0, [255, 255, 255, 255]);
    // Between grid lines the white background shows through
    assert_eq!(png.get_pixel(5, 5).0, [255, 255, 255, 255]);
}

#[test]
fn centers_image_on_canvas() {
    let temp = TempDir::new().unwrap();
    let source = temp.path().join("dot.png");
    image::RgbaImage::from_pixel(10, 10, image::Rgba([0, 0, 255, 255]))
        .save(&source)
        .unwrap();
    let output = temp.path().join("out.png");

    plotcanvas_cmd(&temp)
        .args(["--width", "100", "--height", "100", "--image"])
        .arg(&source)
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    let png = image::open(&output).unwrap().into_rgba8();
    assert_eq!(png.get_pixel(50, 50).0, [0, 0, 255, 255]);
    assert_eq!(png.get_pixel(10, 10).0, [255, 255, 255, 255]);
}

#[test]
fn missing_image_is_reported() {
    let temp = TempDir::new().unwrap();
    let output = temp.path().join("out.png");

    plotcanvas_cmd(&temp)
        .args(["--image", "/nonexistent/picture.png", "--output"])
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to open image"));

    assert!(!output.exists());
}

#[test]
fn config_file_sets_background() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("custom.toml");
    std::fs::write(
        &config,
        "[canvas]\nwidth = 32.0\nheight = 16.0\nbackground = [10, 20, 30]\n",
    )
    .unwrap();
    let output = temp.path().join("out.png");

    plotcanvas_cmd(&temp)
        .arg("--config")
        .arg(&config)
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    let png = image::open(&output).unwrap().into_rgba8();
    assert_eq!(png.dimensions(), (32, 16));
    assert_eq!(png.get_pixel(16, 8).0, [10, 20, 30, 255]);
}

#[test]
fn malformed_config_is_reported() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("broken.toml");
    std::fs::write(&config, "[canvas\nwidth =").unwrap();

    plotcanvas_cmd(&temp)
        .arg("--config")
        .arg(&config)
        .args(["--output", "unused.png"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config"));
}
