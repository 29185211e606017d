// src/ui/radar.rs
use eframe::egui;
use egui_plot::{Line, Plot, PlotPoint, Text};
use std::f64::consts::{FRAC_PI_2, TAU};

use super::ACCENT;
use crate::config::{MetricDimension, ProductMetrics};

const RINGS: [f64; 4] = [25.0, 50.0, 75.0, 100.0];
const LABEL_RADIUS: f64 = 122.0;

// Vertex `index` of a hexagon of `radius`, starting at twelve o'clock
fn vertex(index: usize, radius: f64) -> [f64; 2] {
    let angle = FRAC_PI_2 - TAU * index as f64 / MetricDimension::ALL.len() as f64;
    [radius * angle.cos(), radius * angle.sin()]
}

fn closed_ring(radii: impl Iterator<Item = f64>) -> Vec<[f64; 2]> {
    let mut points: Vec<[f64; 2]> = radii.enumerate().map(|(i, r)| vertex(i, r)).collect();
    if let Some(first) = points.first().copied() {
        points.push(first);
    }
    points
}

pub fn show_radar(ui: &mut egui::Ui, id: impl std::hash::Hash, metrics: &ProductMetrics, size: f32) {
    let plot = Plot::new(id)
        .width(size)
        .height(size)
        .data_aspect(1.0)
        .allow_zoom(false)
        .allow_drag(false)
        .show_background(false)
        .show_axes([false, false])
        .include_x(-140.0)
        .include_x(140.0)
        .include_y(-140.0)
        .include_y(140.0);

    let show_labels = size >= 200.0;

    plot.show(ui, |plot_ui| {
        for ring in RINGS {
            let grid = closed_ring(MetricDimension::ALL.iter().map(|_| ring));
            plot_ui.line(Line::new(grid).color(egui::Color32::from_gray(80)).width(0.5));
        }

        let profile = closed_ring(metrics.iter().map(|(_, score)| score as f64));
        plot_ui.line(Line::new(profile).color(ACCENT).width(2.0));

        if show_labels {
            for (i, (dimension, score)) in metrics.iter().enumerate() {
                let [x, y] = vertex(i, LABEL_RADIUS);
                plot_ui.text(Text::new(
                    PlotPoint::new(x, y),
                    format!("{} {}", dimension.label(), score),
                ));
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_vertex_points_up() {
        let [x, y] = vertex(0, 100.0);
        assert!(x.abs() < 1e-9);
        assert!((y - 100.0).abs() < 1e-9);
    }

    #[test]
    fn ring_is_closed() {
        let ring = closed_ring([10.0, 20.0, 30.0, 40.0, 50.0, 60.0].into_iter());
        assert_eq!(ring.len(), 7);
        assert_eq!(ring.first(), ring.last());
    }
}
