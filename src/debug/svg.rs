use std::{fmt::{self, Write as _}, io, path};

use crate::{Chain, chain::Chains, debug, inputs::Coords};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum SvgOutputLevel {
    None,
    ResultOnly,
    AllSteps,
}

pub(crate) struct SvgContext {
    pub output_path: path::PathBuf,
    pub output_level: SvgOutputLevel,
    pub view_x_min: f32,
    pub view_x_max: f32,
    pub view_y_min: f32,
    pub view_y_max: f32,
    pub show_labels: bool,
}

impl SvgContext {
    pub fn from_env(coords: &[Coords]) -> Option<Self> {
        let output_path = debug::env::svg::output_path()?;
        let output_level = debug::env::svg::output_level();
        let show_labels = debug::env::svg::show_labels();

        if output_level == SvgOutputLevel::None {
            return None;
        }

        let mut view_x_min = f32::MAX;
        let mut view_x_max = f32::MIN;
        let mut view_y_min = f32::MAX;
        let mut view_y_max = f32::MIN;
        for c in coords {
            view_x_min = view_x_min.min(c.x() as f32);
            view_x_max = view_x_max.max(c.x() as f32);
            view_y_min = view_y_min.min(c.y() as f32);
            view_y_max = view_y_max.max(c.y() as f32);
        }

        let w = (view_x_max - view_x_min).max(1.0);
        let h = (view_y_max - view_y_min).max(1.0);
        let margin_scale = 0.1;

        Some(Self {
            output_path,
            output_level,
            view_x_min: view_x_min - w * margin_scale,
            view_x_max: view_x_max + w * margin_scale,
            view_y_min: view_y_min - h * margin_scale,
            view_y_max: view_y_max + h * margin_scale,
            show_labels,
        })
    }

    pub fn view_w(&self) -> f32 { self.view_x_max - self.view_x_min }
    pub fn view_h(&self) -> f32 { self.view_y_max - self.view_y_min }

    pub fn view_min_size(&self) -> f32 { self.view_w().min(self.view_h()) }

    pub fn percent(&self, p: f32) -> f32 { self.view_min_size() * p / 100.0 }
}

pub(crate) struct SvgOutput<'a> {
    pub context: &'a SvgContext,
    content: String,
}

impl<'a> SvgOutput<'a> {
    pub fn new(context: &'a SvgContext) -> Self {
        Self {
            context,
            content: String::new(),
        }
    }

    pub fn save<P: AsRef<path::Path>>(self, file_name: P) -> io::Result<()> {
        use std::io::Write;

        let path = self.context.output_path.join(file_name);
        let f = std::fs::File::create(path)?;
        let mut w = io::BufWriter::new(&f);

        writeln!(w, "<svg viewBox=\"{}, {}, {}, {}\" xmlns=\"http://www.w3.org/2000/svg\">", self.context.view_x_min, self.context.view_y_min, self.context.view_w(), self.context.view_h())?;
        writeln!(w, "{}", self.content)?;
        writeln!(w, "</svg>")?;
        Ok(())
    }
}

impl<'a> fmt::Write for SvgOutput<'a> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.content.write_str(s)
    }
}

// svg_fmt is missing a function for Circle
pub(crate) fn circle(x: f32, y: f32, r: f32) -> svg_fmt::Circle {
    svg_fmt::Circle {
        x,
        y,
        radius: r,
        style: svg_fmt::Style::default(),
    }
}

/// Collects the diagonals of one sweep and writes snapshots of its progress
pub(crate) struct SweepRecorder {
    context: SvgContext,
    coords: Vec<Coords>,
    diagonals: Vec<[usize; 2]>,
}

impl SweepRecorder {
    pub fn from_env(coords: &[Coords]) -> Option<Self> {
        let context = SvgContext::from_env(coords)?;
        Some(Self {
            context,
            coords: coords.to_vec(),
            diagonals: Vec::new(),
        })
    }

    pub fn add_diagonal(&mut self, p0: usize, p1: usize) {
        self.diagonals.push([p0, p1]);
    }

    pub fn step(&mut self, step: usize, chains: &Chains, stack: &[usize], cur: usize) {
        if self.context.output_level >= SvgOutputLevel::AllSteps {
            let result = self.write(chains, stack, Some(cur)).and_then(|svg| {
                svg.save(format!("step_{:03}.svg", step)).map_err(|_| fmt::Error)
            });
            if result.is_err() {
                log::warn!("failed to write svg snapshot for step {}", step);
            }
        }
    }

    pub fn result(&mut self, chains: &Chains) {
        let result = self.write(chains, &[], None).and_then(|svg| {
            svg.save("result.svg").map_err(|_| fmt::Error)
        });
        if result.is_err() {
            log::warn!("failed to write svg triangulation result");
        }
    }

    fn write(&self, chains: &Chains, stack: &[usize], cur: Option<usize>) -> Result<SvgOutput<'_>, fmt::Error> {
        use svg_fmt::*;

        let mut svg = SvgOutput::new(&self.context);
        let width = self.context.percent(0.3);

        let outline: Vec<[f32; 2]> = self.coords.iter().map(|c| [c.x() as f32, c.y() as f32]).collect();
        writeln!(svg, "{}",
            polygon(&outline)
                .fill(Fill::None)
                .stroke(Stroke::Color(rgb(255, 0, 255), width))
        )?;

        for &[p0, p1] in &self.diagonals {
            let (a, b) = (self.coords[p0], self.coords[p1]);
            writeln!(svg, "{}",
                line_segment(a.x() as f32, a.y() as f32, b.x() as f32, b.y() as f32)
                    .color(rgb(0, 126, 255))
                    .width(width)
            )?;
        }

        let r = self.context.percent(0.8);
        for (p, c) in self.coords.iter().enumerate() {
            let color = if Some(p) == cur {
                rgb(255, 126, 0)
            } else if stack.contains(&p) {
                red()
            } else {
                match chains.of(p) {
                    Chain::Upper => green(),
                    Chain::Lower => blue(),
                }
            };
            writeln!(svg, "{}", circle(c.x() as f32, c.y() as f32, r).fill(Fill::Color(color)))?;

            if self.context.show_labels {
                writeln!(svg, "{}",
                    text(c.x() as f32 + r, c.y() as f32 - r, format!("{}", p))
                        .color(black())
                        .size(self.context.percent(3.0))
                )?;
            }
        }

        Ok(svg)
    }
}
