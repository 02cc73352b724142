//! End-to-end export: bytes in, PNG file out.

use nfoview::raster::{ExportOptions, Glyphs, export_png, render_raster};
use nfoview::theme::theme_by_id;
use nfoview::{Error, NfoDocument, RenderMode};

fn banner() -> NfoDocument {
    // ╔══╗ / ║░▓║ / ╚══╝ in CP437, CRLF terminated.
    let bytes = [
        0xC9, 0xCD, 0xCD, 0xBB, b'\r', b'\n', //
        0xBA, 0xB0, 0xB2, 0xBA, b'\r', b'\n', //
        0xC8, 0xCD, 0xCD, 0xBC, b'\r', b'\n',
    ];
    NfoDocument::from_bytes(bytes.to_vec(), "banner.nfo")
}

fn decode_png(bytes: &[u8]) -> image::RgbaImage {
    image::load_from_memory_with_format(bytes, image::ImageFormat::Png)
        .unwrap()
        .to_rgba8()
}

#[test]
fn export_writes_png_of_canvas_size() {
    let doc = banner();
    let palette = theme_by_id("classic-blue").palette();
    let frame = render_raster(
        &doc,
        &palette,
        &ExportOptions::default(),
        &mut Glyphs::builtin(),
    )
    .unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(doc.export_file_name());
    export_png(&frame, &path).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    let image = decode_png(&bytes);
    // 4 cols: ceil(4 * 8.4 + 32) = 66; 3 rows: 3 * 14 + 32 = 74
    assert_eq!(image.dimensions(), (66, 74));
    assert_eq!(path.file_name().unwrap(), "banner.png");

    let bg = palette.background.to_array();
    assert_eq!(image.get_pixel(0, 0).0, bg);
    assert_eq!(image.get_pixel(65, 73).0, bg);
}

#[test]
fn export_draws_art_in_art_colour() {
    let doc = NfoDocument::build("██", "solid.nfo");
    let palette = theme_by_id("classic-green").palette();
    let frame = render_raster(
        &doc,
        &palette,
        &ExportOptions::default(),
        &mut Glyphs::builtin(),
    )
    .unwrap();
    let image = decode_png(&frame.to_png().unwrap());
    let art = palette.art.to_array();
    // Both cells, seamless across the column boundary.
    for x in 16..32 {
        assert_eq!(image.get_pixel(x, 20).0, art, "x = {x}");
    }
}

#[test]
fn text_mode_export_uses_foreground() {
    let doc = NfoDocument::build("█", "solid.nfo");
    let palette = theme_by_id("white").palette();
    let options = ExportOptions {
        mode: RenderMode::Text,
        ..ExportOptions::default()
    };
    let frame = render_raster(&doc, &palette, &options, &mut Glyphs::builtin()).unwrap();
    let image = decode_png(&frame.to_png().unwrap());
    assert_eq!(image.get_pixel(18, 20).0, palette.foreground.to_array());
}

#[test]
fn export_to_missing_directory_fails_cleanly() {
    let doc = banner();
    let palette = theme_by_id("dark").palette();
    let frame = render_raster(
        &doc,
        &palette,
        &ExportOptions::default(),
        &mut Glyphs::builtin(),
    )
    .unwrap();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("out.png");
    let err = export_png(&frame, &path).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
    assert!(!path.exists());
}

#[test]
fn export_replaces_existing_file() {
    let doc = banner();
    let palette = theme_by_id("dark").palette();
    let frame = render_raster(
        &doc,
        &palette,
        &ExportOptions::default(),
        &mut Glyphs::builtin(),
    )
    .unwrap();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.png");
    std::fs::write(&path, b"old").unwrap();
    export_png(&frame, &path).unwrap();
    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(&bytes[..4], b"\x89PNG");
}
