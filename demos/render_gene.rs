use genoform::{decode_gene, render_creature};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let mut args = std::env::args().skip(1);
    let gene: genoform::Gene = match args.next() {
        Some(raw) => raw.parse()?,
        None => 0x2_ACE1_B765,
    };
    let size: u32 = match args.next() {
        Some(raw) => raw.parse()?,
        None => 400,
    };
    let out = args.next().unwrap_or_else(|| "creature.png".to_string());

    let traits = decode_gene(gene);
    println!("gene {gene}: {traits:?}");
    let png = render_creature(&traits, size)?;
    std::fs::write(&out, png)?;
    println!("wrote {out} ({size}x{size})");

    Ok(())
}
