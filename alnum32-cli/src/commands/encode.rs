use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use tracing::info;

pub fn execute(input: &str, output: Option<&str>) -> Result<()> {
    info!("Encoding {} to {}", input, output.unwrap_or("stdout"));

    let data = fs::read(input).with_context(|| format!("Failed to read input file: {}", input))?;

    let text = alnum32_core::encode(&data);

    info!("Encoded {} bytes into {} symbols", data.len(), text.len());

    match output {
        Some(path) => {
            fs::write(path, text.as_bytes())
                .with_context(|| format!("Failed to write output file: {}", path))?;
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            handle.write_all(text.as_bytes())?;
            handle.write_all(b"\n")?;
        }
    }

    Ok(())
}
