use std::fmt::{Display, Formatter, Result as FmtResult};

use glimmer_core::{Animation, Art, Component, Glyph, Graphic, Shape};

/// Indented, human readable outline of a piece of art.
pub struct Summary<'a>(pub &'a Art);

fn plural(count: usize, one: &str, many: &str) -> String {
    if count == 1 {
        format!("1 {one}")
    } else {
        format!("{count} {many}")
    }
}

fn indent(f: &mut Formatter<'_>, depth: usize) -> FmtResult {
    write!(f, "{:width$}", "", width = depth * 2)
}

fn glyph(f: &mut Formatter<'_>, glyph: &Glyph) -> FmtResult {
    write!(f, "{}", glyph.mode())?;
    if glyph.is_curve() {
        f.write_str(" curve")?;
    }
    write!(f, ", {}", plural(glyph.len(), "point", "points"))
}

fn shape(f: &mut Formatter<'_>, shape: &Shape) -> FmtResult {
    glyph(f, shape)?;
    write!(
        f,
        ", {}, line {}, point {}",
        shape.color, shape.line_thickness, shape.point_size
    )
}

fn graphic(f: &mut Formatter<'_>, depth: usize, graphic: &Graphic) -> FmtResult {
    writeln!(f, "{}", plural(graphic.len(), "layer", "layers"))?;
    for (index, layer) in graphic.iter().enumerate() {
        indent(f, depth + 1)?;
        write!(f, "layer {index}: ")?;
        shape(f, layer)?;
        writeln!(f)?;
    }
    Ok(())
}

fn animation(f: &mut Formatter<'_>, depth: usize, animation: &Animation) -> FmtResult {
    writeln!(
        f,
        "{}, {}, {} {} per pass",
        plural(animation.len(), "frame", "frames"),
        if animation.cycle { "cycling" } else { "once" },
        animation.total_duration(),
        animation.delay_unit,
    )?;
    for (index, frame) in animation.iter().enumerate() {
        indent(f, depth + 1)?;
        write!(f, "frame {index} (delay {}): ", frame.delay)?;
        graphic(f, depth + 1, &frame.graphic)?;
    }
    Ok(())
}

fn component(f: &mut Formatter<'_>, depth: usize, component: &Component) -> FmtResult {
    write!(
        f,
        "at {}, rotated {}, scaled {}",
        component.position, component.rotation, component.scale
    )?;
    if !component.is_still() {
        f.write_str(", moving")?;
    }
    f.write_str(": ")?;
    animation(f, depth, &component.animation)
}

impl Display for Summary<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}: ", self.0.kind())?;
        match self.0 {
            Art::Glyph(g) => {
                glyph(f, g)?;
                writeln!(f)
            }
            Art::Shape(s) => {
                shape(f, s)?;
                writeln!(f)
            }
            Art::Graphic(g) => graphic(f, 0, g),
            Art::Animation(a) => animation(f, 0, a),
            Art::Painting(painting) => {
                writeln!(f, "{}", plural(painting.len(), "component", "components"))?;
                for (index, c) in painting.iter().enumerate() {
                    indent(f, 1)?;
                    write!(f, "component {index} ")?;
                    component(f, 1, c)?;
                }
                Ok(())
            }
        }
    }
}
