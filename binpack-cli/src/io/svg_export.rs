use binpack::entities::Bin;
use svg::Document;
use svg::node::element::{Group, Line, Rectangle, Text, Title};

use crate::io::svg_util;
use crate::io::svg_util::SvgDrawOptions;

const CHART_HEIGHT: f64 = 100.0;
const BAR_WIDTH: f64 = 10.0;
const BAR_GAP: f64 = 2.5;

/// Bar chart of the fill level of every bin.
/// With a `capacity`, the bars are drawn against it and items exceeding it are highlighted.
pub fn bins_to_svg(bins: &[Bin], capacity: Option<f64>, options: SvgDrawOptions, title: &str) -> Document {
    let theme = options.theme.get_theme();

    let max_weight = bins.iter().map(Bin::weight).fold(0.0, f64::max);
    let scale_max = match f64::max(max_weight, capacity.unwrap_or(0.0)) {
        m if m > 0.0 => m,
        _ => 1.0,
    };
    let to_height = |weight: f64| weight / scale_max * CHART_HEIGHT;

    let chart_width = f64::max(bins.len() as f64 * (BAR_WIDTH + BAR_GAP) - BAR_GAP, BAR_WIDTH);
    let stroke_width = 0.001 * f64::min(chart_width, CHART_HEIGHT) * theme.stroke_width_multiplier;
    let font_size = 0.04 * CHART_HEIGHT;

    let label = {
        let total_weight: f64 = bins.iter().map(Bin::weight).sum();
        let n_items: usize = bins.iter().map(Bin::len).sum();
        let label_content = format!(
            "bins: {} | items: {} | total weight: {:.3} | {}",
            bins.len(),
            n_items,
            total_weight,
            title
        );
        Text::new(label_content)
            .set("x", 0.0)
            .set("y", -0.5 * font_size)
            .set("font-size", font_size)
            .set("font-family", "monospace")
            .set("font-weight", "500")
    };

    let bins_group = bins.iter().enumerate().fold(Group::new().set("id", "bins"), |group, (i, bin)| {
        let x = i as f64 * (BAR_WIDTH + BAR_GAP);
        let outline_height = to_height(capacity.unwrap_or(scale_max));

        let mut bin_group = Group::new()
            .set("id", format!("bin_{i}"))
            .add(Title::new(format!(
                "bin {i}, items: {}, weight: {:.3}",
                bin.len(),
                bin.weight()
            )))
            .add(
                Rectangle::new()
                    .set("x", x)
                    .set("y", CHART_HEIGHT - outline_height)
                    .set("width", BAR_WIDTH)
                    .set("height", outline_height)
                    .set("fill", theme.bin_fill.to_string())
                    .set("fill-opacity", 0.3)
                    .set("stroke", "black")
                    .set("stroke-width", stroke_width),
            );

        match options.draw_items {
            true => {
                // items are stacked bottom up, in order of insertion
                let mut filled = 0.0;
                for item in bin.items() {
                    let oversized = capacity.is_some_and(|c| item.weight() > c);
                    let fill = match oversized {
                        true => theme.oversized_fill,
                        false => theme.item_fill,
                    };
                    let height = to_height(item.weight());
                    filled += height;
                    bin_group = bin_group.add(
                        Rectangle::new()
                            .set("x", x)
                            .set("y", CHART_HEIGHT - filled)
                            .set("width", BAR_WIDTH)
                            .set("height", height)
                            .set("fill", fill.to_string())
                            .set("stroke", svg_util::change_brightness(fill, 0.5).to_string())
                            .set("stroke-width", 0.5 * stroke_width)
                            .add(Title::new(format!("item {}, weight: {:.3}", item.id(), item.weight()))),
                    );
                }
            }
            false => {
                let height = to_height(bin.weight());
                bin_group = bin_group.add(
                    Rectangle::new()
                        .set("x", x)
                        .set("y", CHART_HEIGHT - height)
                        .set("width", BAR_WIDTH)
                        .set("height", height)
                        .set("fill", theme.item_fill.to_string()),
                );
            }
        }
        group.add(bin_group)
    });

    let mut document = Document::new()
        .set(
            "viewBox",
            (
                -BAR_GAP,
                -2.0 * font_size,
                chart_width + 2.0 * BAR_GAP,
                CHART_HEIGHT + 2.0 * font_size + BAR_GAP,
            ),
        )
        .add(
            Rectangle::new()
                .set("x", -BAR_GAP)
                .set("y", -2.0 * font_size)
                .set("width", chart_width + 2.0 * BAR_GAP)
                .set("height", CHART_HEIGHT + 2.0 * font_size + BAR_GAP)
                .set("fill", theme.background_fill.to_string()),
        )
        .add(bins_group);

    if let (Some(capacity), true) = (capacity, options.capacity_line) {
        let y = CHART_HEIGHT - to_height(capacity);
        document = document.add(
            Line::new()
                .set("id", "capacity")
                .set("x1", -BAR_GAP)
                .set("y1", y)
                .set("x2", chart_width + BAR_GAP)
                .set("y2", y)
                .set("stroke", theme.capacity_color.to_string())
                .set("stroke-width", 2.0 * stroke_width)
                .set("stroke-dasharray", format!("{} {}", 4.0 * stroke_width, 2.0 * stroke_width))
                .add(Title::new(format!("volume: {capacity:.3}"))),
        );
    }

    document.add(label)
}
