// Demo: render pixel art from an ASCII grid and from generated RGBA data.

use anyhow::Result;
use log::info;
use ripix::{Pixels, Rgb, Segment, Style};
use std::collections::HashMap;

const GRID: &str = concat!(
    "     xx   xx\n",
    "     ox   ox\n",
    "     Ox   Ox\n",
    "xx             xx\n",
    "xxxxxxxxxxxxxxxxx\n",
);

const GRADIENT_WIDTH: usize = 16;
const GRADIENT_HEIGHT: usize = 4;

fn grid_mapping() -> HashMap<char, Segment> {
    let yellow = Rgb(255, 255, 0);
    HashMap::from([
        ('x', Segment::new(" ", Style::on(yellow).with_foreground(yellow))),
        ('o', Segment::new(" ", Style::on(Rgb(255, 255, 255)))),
        (
            'O',
            Segment::new(
                "O",
                Style::on(Rgb(0, 0, 255)).with_foreground(Rgb(255, 255, 255)),
            ),
        ),
    ])
}

fn gradient() -> Vec<[u8; 4]> {
    (0..GRADIENT_HEIGHT)
        .flat_map(|y| {
            (0..GRADIENT_WIDTH).map(move |x| {
                let red = (x * 255 / (GRADIENT_WIDTH - 1)) as u8;
                let blue = (y * 255 / (GRADIENT_HEIGHT - 1)) as u8;
                [red, 64, blue, 255]
            })
        })
        .collect()
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let art = Pixels::from_ascii_async(GRID, &grid_mapping()).await;
    info!("Rendered grid into {} segments", art.segments().len());
    print!("{art}");

    let image = Pixels::from_rgba_async(GRADIENT_WIDTH, gradient()).await?;
    print!("{image}");
    Ok(())
}
