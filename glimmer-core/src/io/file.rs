//! Whole-file loading and saving.
//!
//! Each call opens its file, reads or writes exactly one document and closes it again before
//! returning, whether or not it succeeded.

use std::{
    fs::File,
    io::{BufReader, Write},
    path::Path,
};

use super::{
    codec::{self, Document},
    error::{LoadError, SaveError},
    Format,
};
use crate::art::{Art, ArtKind};

fn open(path: &Path) -> Result<BufReader<File>, LoadError> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| LoadError::Open {
            path: path.to_owned(),
            source,
        })
}

/// Replace the contents of `path` with an already encoded document.
///
/// The file is only created, and so only truncated, once encoding has succeeded.
fn write_encoded(path: &Path, bytes: &[u8]) -> Result<(), SaveError> {
    let mut file = File::create(path).map_err(|source| SaveError::Create {
        path: path.to_owned(),
        source,
    })?;
    file.write_all(bytes)
        .and_then(|()| file.flush())
        .map_err(|source| SaveError::Write {
            path: path.to_owned(),
            source,
        })
}

fn warn_legacy(path: &Path, format: Format, verb: &str) {
    if let Format::Legacy(revision) = format {
        log::warn!(
            "{verb} {} as headerless {revision} data, byte order is host dependent",
            path.display()
        );
    }
}

/// Load a document of a known kind.
/// # Errors
/// [`LoadError::Open`] if the file couldn't be opened, [`LoadError::Decode`] if it didn't
/// hold exactly one valid `T`.
pub fn load<T: Document>(path: impl AsRef<Path>, format: Format) -> Result<T, LoadError> {
    let path = path.as_ref();
    let reader = open(path)?;
    warn_legacy(path, format, "reading");
    let value = codec::read_document(reader, format).map_err(|source| LoadError::Decode {
        path: path.to_owned(),
        source,
    })?;
    log::debug!("loaded {} from {}", T::KIND, path.display());
    Ok(value)
}

/// Load a current-revision document.
/// # Errors
/// See [`load`].
pub fn load_from_path<T: Document>(path: impl AsRef<Path>) -> Result<T, LoadError> {
    load(path, Format::Current)
}

/// Replace `target` with the document at `path`. On failure `target` is left untouched.
/// # Errors
/// See [`load`].
pub fn load_into<T: Document>(target: &mut T, path: impl AsRef<Path>) -> Result<(), LoadError> {
    *target = load_from_path(path)?;
    Ok(())
}

/// Save a document, replacing anything already at `path`.
///
/// If the value can't be encoded in `format`, the existing file is left as it was.
/// # Errors
/// [`SaveError::Encode`] if the value couldn't be written in `format`, [`SaveError::Create`] if
/// the file couldn't be opened for writing, [`SaveError::Write`] if writing it failed.
pub fn save<T: Document>(value: &T, path: impl AsRef<Path>, format: Format) -> Result<(), SaveError> {
    let path = path.as_ref();
    warn_legacy(path, format, "writing");
    let mut bytes = Vec::new();
    codec::write_document(value, format, &mut bytes).map_err(|source| SaveError::Encode {
        path: path.to_owned(),
        source,
    })?;
    write_encoded(path, &bytes)?;
    log::debug!("saved {} to {} ({} bytes)", T::KIND, path.display(), bytes.len());
    Ok(())
}

/// Save a current-revision document.
/// # Errors
/// See [`save`].
pub fn save_to_path<T: Document>(value: &T, path: impl AsRef<Path>) -> Result<(), SaveError> {
    save(value, path, Format::Current)
}

/// Load whatever art is at `path`.
///
/// Current-revision files name their own kind. Headerless files are read as the kind their
/// extension names.
/// # Errors
/// See [`load`]. Also fails if a headerless file's extension names no kind, or if the kind
/// can't be loaded at all.
pub fn load_art(path: impl AsRef<Path>, format: Format) -> Result<Art, LoadError> {
    let path = path.as_ref();
    let by_extension = ArtKind::from_path(path);
    if by_extension == Some(ArtKind::Spritesheet) {
        return Err(LoadError::Unsupported(ArtKind::Spritesheet));
    }
    if format != Format::Current && by_extension.is_none() {
        return Err(LoadError::UnknownExtension(path.to_owned()));
    }
    let reader = open(path)?;
    warn_legacy(path, format, "reading");
    let art = codec::read_art(reader, format, by_extension).map_err(|source| {
        LoadError::Decode {
            path: path.to_owned(),
            source,
        }
    })?;
    match by_extension {
        Some(named) if named != art.kind() => log::warn!(
            "{} holds {} art despite its extension",
            path.display(),
            art.kind()
        ),
        _ => (),
    }
    log::debug!("loaded {} from {}", art.kind(), path.display());
    Ok(art)
}

/// Save any art, replacing anything already at `path`.
/// # Errors
/// See [`save`].
pub fn save_art(art: &Art, path: impl AsRef<Path>, format: Format) -> Result<(), SaveError> {
    let path = path.as_ref();
    match ArtKind::from_path(path) {
        Some(named) if named != art.kind() => log::warn!(
            "saving {} art to {}, whose extension names {named}",
            art.kind(),
            path.display()
        ),
        _ => (),
    }
    warn_legacy(path, format, "writing");
    let mut bytes = Vec::new();
    codec::write_art(art, format, &mut bytes).map_err(|source| SaveError::Encode {
        path: path.to_owned(),
        source,
    })?;
    write_encoded(path, &bytes)?;
    log::debug!("saved {} to {} ({} bytes)", art.kind(), path.display(), bytes.len());
    Ok(())
}

#[cfg(test)]
mod test {
    use super::{load, load_art, load_from_path, load_into, save, save_art, save_to_path};
    use crate::{
        art::{Art, ArtKind},
        io::{from_bytes, DecodeError, EncodeError, Format, LegacyRevision, LoadError, SaveError},
        Animation, Color, Component, DelayUnit, DrawMode, Frame, Glyph, Graphic, Painting, Point,
        Shape,
    };

    const LAYERS: &[u8] = include_bytes!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/test-data/layers.fgr"
    ));
    fn fixture(name: &str) -> std::path::PathBuf {
        std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("test-data")
            .join(name)
    }
    fn walk() -> Animation {
        let pose = |x: f32| {
            let glyph = Glyph::with_points(
                DrawMode::Lines,
                false,
                vec![Point::new(x, 0.0), Point::new(x, 2.0)],
            );
            Graphic::from(vec![Shape::with_style(glyph, Color::BLACK, 2.0, 1.0)])
        };
        Animation::with_frames(
            true,
            DelayUnit::Frames,
            vec![Frame::new(6, pose(0.0)), Frame::new(6, pose(1.0))],
        )
    }

    #[test]
    fn round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("walk.fan");
        save_to_path(&walk(), &path).unwrap();
        assert_eq!(load_from_path::<Animation>(&path).unwrap(), walk());
    }
    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_from_path::<Glyph>(dir.path().join("nothing.fgl")).unwrap_err();
        assert!(matches!(err, LoadError::Open { .. }), "{err:?}");
    }
    #[test]
    fn unwritable_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no").join("such").join("dir.fgl");
        let err = save_to_path(&Glyph::default(), path).unwrap_err();
        assert!(matches!(err, SaveError::Create { .. }), "{err:?}");
    }
    #[test]
    fn save_truncates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("walk.fan");
        std::fs::write(&path, [0xAA; 4096]).unwrap();
        save_to_path(&walk(), &path).unwrap();
        assert_eq!(load_from_path::<Animation>(&path).unwrap(), walk());
    }
    #[test]
    fn unrepresentable_save() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("walk.fan");
        let err = save(&walk(), &path, Format::Legacy(LegacyRevision::Bezier)).unwrap_err();
        assert!(
            matches!(
                err,
                SaveError::Encode {
                    source: EncodeError::Unrepresentable(_),
                    ..
                }
            ),
            "{err:?}"
        );
    }
    #[test]
    fn failed_save_keeps_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("layers.fgr");
        let opaque = Shape::new(Glyph::new(DrawMode::Points));
        save_to_path(&Graphic::from(vec![opaque.clone()]), &path).unwrap();
        let before = std::fs::read(&path).unwrap();

        let translucent = Shape::with_style(
            Glyph::new(DrawMode::Points),
            Color::new(1.0, 1.0, 1.0, 0.5),
            1.0,
            1.0,
        );
        let layers = Graphic::from(vec![opaque, translucent]);
        let err = save(&layers, &path, Format::Legacy(LegacyRevision::Rgb)).unwrap_err();
        assert!(
            matches!(
                err,
                SaveError::Encode {
                    source: EncodeError::Unrepresentable(_),
                    ..
                }
            ),
            "{err:?}"
        );
        assert_eq!(std::fs::read(&path).unwrap(), before);

        let mut curve = Glyph::new(DrawMode::LineStrip);
        curve.set_curve(true);
        let rgba = Format::Legacy(LegacyRevision::Rgba);
        assert!(save_art(&Art::from(curve), &path, rgba).is_err());
        assert_eq!(std::fs::read(&path).unwrap(), before);
        assert_eq!(load_from_path::<Graphic>(&path).unwrap().len(), 1);
    }
    #[test]
    fn painting_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scene.bin");
        let painting: Painting = [
            Component {
                position: Point::new(10.0, -4.0),
                rotation: 0.25,
                position_frequency: Point::new(0.5, 0.5),
                position_amplitude: Point::new(2.0, 1.0),
                ..Component::new(walk())
            },
            Component::new(Animation::new(false)),
        ]
        .into_iter()
        .collect();
        save_to_path(&painting, &path).unwrap();
        assert_eq!(&std::fs::read(&path).unwrap()[..8], b"FGR pntg");
        assert_eq!(load_from_path::<Painting>(&path).unwrap(), painting);
        assert_eq!(load_art(&path, Format::Current).unwrap(), Art::from(painting));
    }
    #[test]
    fn failed_load_keeps_target() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("walk.fan");
        let mut target = walk();

        std::fs::write(&path, b"FGR anim\x01\x00\x00\x00\x01\x05").unwrap();
        let err = load_into(&mut target, &path).unwrap_err();
        assert!(
            matches!(
                err,
                LoadError::Decode {
                    source: DecodeError::Truncated { .. },
                    ..
                }
            ),
            "{err:?}"
        );
        assert_eq!(target, walk());

        let empty = Animation::new(false);
        save_to_path(&empty, &path).unwrap();
        load_into(&mut target, &path).unwrap();
        assert_eq!(target, empty);
    }
    #[test]
    fn art_kind_from_header() {
        let dir = tempfile::tempdir().unwrap();
        // Misnamed on purpose, the header wins.
        let path = dir.path().join("walk.fgl");
        save_art(&Art::from(walk()), &path, Format::Current).unwrap();
        assert_eq!(load_art(&path, Format::Current).unwrap(), Art::from(walk()));
        assert!(matches!(
            load_from_path::<Glyph>(&path),
            Err(LoadError::Decode {
                source: DecodeError::WrongKind {
                    expected: ArtKind::Glyph,
                    found: ArtKind::Animation
                },
                ..
            })
        ));
    }
    #[test]
    fn art_kind_from_extension() {
        let dir = tempfile::tempdir().unwrap();
        let legacy = Format::Legacy(LegacyRevision::Rgba);
        let shape = Art::from(Shape::new(Glyph::new(DrawMode::Points)));

        let path = dir.path().join("dot.fsh");
        save_art(&shape, &path, legacy).unwrap();
        assert_eq!(load_art(&path, legacy).unwrap(), shape);

        let unnamed = dir.path().join("dot.bin");
        save_art(&shape, &unnamed, legacy).unwrap();
        assert!(matches!(
            load_art(&unnamed, legacy),
            Err(LoadError::UnknownExtension(_))
        ));
        assert!(matches!(
            load_art(dir.path().join("sheet.fss"), Format::Current),
            Err(LoadError::Unsupported(ArtKind::Spritesheet))
        ));
    }
    #[test]
    fn current_fixture() {
        let graphic: Graphic = from_bytes(LAYERS, Format::Current).unwrap();
        assert_eq!(graphic.len(), 2);
        let [top, bottom] = graphic.shapes() else {
            panic!("expected two layers")
        };
        assert_eq!(top.color, Color::RED);
        assert_eq!(top.line_thickness, 2.5);
        assert_eq!(top.mode(), DrawMode::LineStrip);
        assert_eq!(
            top.points(),
            &[
                Point::new(0.0, 0.0),
                Point::new(1.0, 0.0),
                Point::new(1.0, 1.0)
            ]
        );
        assert_eq!(bottom.color, Color::new(0.0, 1.0, 0.0, 0.25));
        assert_eq!(bottom.point_size, 8.0);
        assert_eq!(bottom.mode(), DrawMode::Points);
        assert_eq!(bottom.points(), &[Point::new(-3.0, 7.0)]);

        assert_eq!(
            load_art(fixture("layers.fgr"), Format::Current).unwrap(),
            Art::Graphic(graphic)
        );
    }
    #[cfg(target_endian = "little")]
    #[test]
    fn legacy_fixtures() {
        const TRIANGLE_RGB: &[u8] = include_bytes!(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/test-data/triangle.rgb.fsh"
        ));
        let rgb = Format::Legacy(LegacyRevision::Rgb);
        let shape: Shape = from_bytes(TRIANGLE_RGB, rgb).unwrap();
        assert_eq!(shape.color, Color::new(1.0, 0.5, 0.25, 1.0));
        assert_eq!((shape.line_thickness, shape.point_size), (2.0, 4.0));
        assert_eq!(shape.mode(), DrawMode::Triangles);
        assert!(!shape.is_curve());
        assert_eq!(shape.len(), 3);

        let bezier = Format::Legacy(LegacyRevision::Bezier);
        let Art::Animation(blink) = load_art(fixture("blink.bezier.fan"), bezier).unwrap() else {
            panic!("expected an animation")
        };
        assert!(blink.cycle);
        assert_eq!(blink.delay_unit, DelayUnit::Milliseconds);
        assert_eq!(blink.len(), 2);
        assert_eq!(blink.total_duration(), 350);
        let shape = &blink.frames()[0].graphic.shapes()[0];
        assert!(shape.is_curve());
        assert_eq!(shape.color.a, 0.5);
        assert_eq!(shape.len(), 4);
        assert!(blink.frames()[1].graphic.is_empty());

        // Same bytes, wrong revision.
        assert!(load::<Animation>(fixture("blink.bezier.fan"), rgb).is_err());
    }
}
