mod image;
mod nibble;

use anyhow::{Context, Result};
use std::fs;

/// Nibble-expand the bootloader image at `input` and write the result to
/// `output`. The output is twice the input's length; a failure mid-write
/// leaves whatever was written and is reported as-is.
pub fn expand_file(input: &str, output: &str) -> Result<()> {
    let image = image::RomImage::load(input)?;
    log::info!("read {} bytes from {input}", image.len());

    let nibbles = nibble::expand(image.bytes());
    fs::write(output, &nibbles).with_context(|| format!("writing nibble stream to {output}"))?;
    log::info!("wrote {} bytes to {output}", nibbles.len());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::expand_file;
    use std::fs;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("mungerom-{}-{name}", std::process::id()))
    }

    #[test]
    fn expands_file_on_disk() {
        let input = temp_path("in.rom");
        let output = temp_path("out.nib");
        fs::write(&input, [0x12, 0x34, 0xAB]).unwrap();

        expand_file(input.to_str().unwrap(), output.to_str().unwrap()).unwrap();

        let got = fs::read(&output).unwrap();
        assert_eq!(got, [0x1F, 0x2F, 0x3F, 0x4F, 0xAF, 0xBF]);

        fs::remove_file(input).ok();
        fs::remove_file(output).ok();
    }

    #[test]
    fn missing_input_is_an_error() {
        let output = temp_path("never-written.nib");
        let err = expand_file("does/not/exist", output.to_str().unwrap()).unwrap_err();
        assert!(err.to_string().contains("does/not/exist"));
    }
}
