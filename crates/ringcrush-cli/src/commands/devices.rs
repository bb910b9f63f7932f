//! Output device listing.

use ringcrush_io::list_output_devices;

pub fn run() -> anyhow::Result<()> {
    let devices = list_output_devices()?;

    if devices.is_empty() {
        println!("No output devices found.");
        return Ok(());
    }

    println!("Output Devices");
    println!("==============\n");
    for (idx, device) in devices.iter().enumerate() {
        println!(
            "  [{}] {} ({} Hz, {} ch){}",
            idx,
            device.name,
            device.default_sample_rate,
            device.channels,
            if device.is_default { " (default)" } else { "" }
        );
    }
    println!("\nSelect with: ringcrush play <file> --device <index or name>");
    Ok(())
}
