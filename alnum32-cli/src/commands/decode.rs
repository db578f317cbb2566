use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use tracing::info;

pub fn execute(input: &str, output: Option<&str>) -> Result<()> {
    info!("Decoding {} to {}", input, output.unwrap_or("stdout"));

    let mut text = fs::read(input).with_context(|| format!("Failed to read input file: {}", input))?;

    // Tolerate a single trailing newline from text editors; the codec
    // itself accepts alphabet symbols only
    if text.last() == Some(&b'\n') {
        text.pop();
        if text.last() == Some(&b'\r') {
            text.pop();
        }
    }

    let data = alnum32_core::decode(&text)
        .with_context(|| format!("Failed to decode input file: {}", input))?;

    info!("Decoded {} symbols into {} bytes", text.len(), data.len());

    match output {
        Some(path) => {
            fs::write(path, &data)
                .with_context(|| format!("Failed to write output file: {}", path))?;
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            handle.write_all(&data)?;
        }
    }

    Ok(())
}
