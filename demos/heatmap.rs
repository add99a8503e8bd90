//! Write `heatmap.html` showing a few gradients sampled into colormaps.

use std::{env,
          io::{BufWriter, Write},
          fs::File,
          error::Error};
use heatmap_gradient::{argb::{self, RED, GREEN, BLUE}, Colormap,
                       GradientSpec, DEFAULT_GRADIENT};

type Err = Box<dyn Error>;

/// CSS color of a packed ARGB color.
fn css_string(c: u32) -> String {
    format!("rgba({}, {}, {}, {:.3})", argb::red(c), argb::green(c),
            argb::blue(c), argb::alpha(c) as f64 / 255.)
}

/// Show `n` colors of `map`, uniformly sampled.
fn table_of_colors(fh: &mut impl Write, map: &Colormap, n: usize,
                   width: u32, comment: &str) -> Result<(), Err> {
    writeln!(fh, "<table style=\"border: 0px;  border-spacing: 0px; \
                  background: repeating-conic-gradient(#ccc 0% 25%, \
                  #fff 0% 50%) 50% / 12px 12px\"><tr>")?;
    let dt = 1. / (n - 1) as f64;
    for i in 0 .. n {
        writeln!(fh, "  <td style=\"width: {width}px; height: 30px; \
                      background-color: {}\"></td>",
                 css_string(map.lookup(i as f64 * dt)))?;
    }
    writeln!(fh, "<td style=\"padding-left: 7px; background: white\">\
                  {comment}</td></tr></table><br/>")?;
    Ok(())
}

fn gradient(fh: &mut impl Write, spec: &GradientSpec,
            comment: &str) -> Result<(), Err> {
    for opacity in [1., 0.6, 0.2] {
        let map = spec.generate(opacity);
        table_of_colors(fh, &map, 150, 2,
                        &format!("{comment} (opacity {opacity})"))?;
    }
    Ok(())
}

fn main() -> Result<(), Err> {
    let mut fh = BufWriter::new(File::create("heatmap.html")?);
    writeln!(fh, "<html>\n\
                  <head>\n\
                  <title>heatmap-gradient: {}</title>\n\
                  </head>\n\
                  <body>",
             env::args().next().unwrap_or_default())?;

    writeln!(fh, "<h3>Default gradient</h3>")?;
    gradient(&mut fh, &DEFAULT_GRADIENT, "green at 0.2 to red")?;

    writeln!(fh, "<h3>Gradients</h3>")?;
    let rgb = GradientSpec::new(vec![RED, GREEN, BLUE], vec![0., 0.5, 1.])?;
    gradient(&mut fh, &rgb, "red, green, blue")?;
    let blue_red = GradientSpec::new(vec![BLUE, RED], vec![0.1, 0.6])?;
    gradient(&mut fh, &blue_red, "blue at 0.1 to red at 0.6")?;
    let coarse = GradientSpec::with_size(
        vec![argb::argb(255, 0, 0, 128), argb::argb(255, 255, 235, 170)],
        vec![0.3, 1.], 12)?;
    gradient(&mut fh, &coarse, "12 entries")?;

    writeln!(fh, "</body>\n\
                  </html>")?;
    Ok(())
}
