use super::*;

#[test]
fn compression_parses_case_insensitively() {
    assert_eq!("FAST".parse::<PngCompression>(), Ok(PngCompression::Fast));
    assert_eq!(" best ".parse::<PngCompression>(), Ok(PngCompression::Best));
    assert!("zstd".parse::<PngCompression>().is_err());
}

#[test]
fn env_lookup_overrides_compression() {
    let opts = ExportOpts::from_lookup(|k| (k == PNG_COMPRESSION_ENV).then(|| "best".to_string()));
    assert_eq!(opts.compression(), PngCompression::Best);
    assert_eq!(opts.background(), None);
}

#[test]
fn env_lookup_ignores_garbage() {
    let opts = ExportOpts::from_lookup(|_| Some("nope".to_string()));
    assert_eq!(opts, ExportOpts::default());
}

#[test]
fn builders_set_fields() {
    let opts = ExportOpts::default()
        .with_background(Some(Rgba8::WHITE))
        .with_compression(PngCompression::Fast);
    assert_eq!(opts.background(), Some(Rgba8::WHITE));
    assert_eq!(opts.compression(), PngCompression::Fast);
}
