use std::error::Error;

use stackism::{Segment, SymbolBuilder, Symbology};

fn main() -> Result<(), Box<dyn Error>> {
    let data = "Hello, world! 🌏";

    let symbol = SymbolBuilder::with_segments(vec![Segment::from_text_auto(data)])
        .symbology(Symbology::Pdf417)
        .ec_level(2)
        .build()?;
    println!("{}", symbol.to_str(1));

    let micro = SymbolBuilder::new(b"1234567890").symbology(Symbology::MicroPdf417).build()?;
    println!("{}", micro.to_str(1));

    Ok(())
}
