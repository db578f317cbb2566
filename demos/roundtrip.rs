//! Basic round-trip example

use alnum32_core::{decode, encode};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Alnum32 Round-Trip Example\n");

    let payloads: [&[u8]; 4] = [
        b"hello",
        b"The quick brown fox",
        &[0x00, 0x01, 0x02, 0x03, 0x04],
        &[],
    ];

    for payload in payloads {
        let text = encode(payload);
        let back = decode(text.as_bytes())?;

        println!("{:>4} bytes -> {:?} ({} symbols)", payload.len(), text, text.len());
        assert_eq!(back, payload);
    }

    // Strictness: a tampered tail is rejected, not silently accepted
    match decode(b"cb") {
        Err(e) => println!("\nTampered input rejected: {}", e),
        Ok(_) => unreachable!(),
    }

    Ok(())
}
