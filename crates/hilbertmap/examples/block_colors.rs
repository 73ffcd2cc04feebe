//! Print the colours of the first row of blocks under both projections.

use std::error::Error;

use hilbertmap::{AxisOrder, BlockCount, ColorProjector, Projection};

fn main() -> Result<(), Box<dyn Error>> {
    let blocks = BlockCount::try_from(8)?;
    for projection in [Projection::ScaleDistance, Projection::ScaleVector] {
        let projector = ColorProjector::new(
            blocks,
            projection,
            AxisOrder::identity(),
            AxisOrder::identity(),
        )?;
        println!("{projection}:");
        for x in 0..blocks.count() {
            let d = projector.distance(x, 0)?;
            let color = projector.color(x, 0)?;
            println!("  block ({x},0): d={d:>2} color={color}");
        }
    }
    Ok(())
}
