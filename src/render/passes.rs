//! Layered scene passes.
//!
//! Each frame redraws the whole scene from scratch in a fixed order:
//! background, short-range links, base pairs, backbone chains, particle
//! disks, sparse long-range links. Depth-dependent opacities and sizes
//! interpolate from the z coordinate with the viewer side (positive z)
//! mapped high; disk passes paint far-to-near.

use glam::{Vec2, Vec3};
use rand::Rng;

use crate::model::{params, HelixModel, Strand};
use crate::options::Options;
use crate::render::canvas::{Canvas, Rgba};
use crate::util::depth::depth_mix;

/// Stroke width of short-range link lines.
pub(crate) const LINK_WIDTH: f32 = 0.8;
/// Stroke width of hydrogen-bond lines.
pub(crate) const BOND_WIDTH: f32 = 1.4;
/// Stroke width of backbone chain lines.
pub(crate) const CHAIN_WIDTH: f32 = 1.6;
/// Stroke width of long-range link lines.
pub(crate) const DISTANT_WIDTH: f32 = 0.6;

/// Chance that a backbone chain segment is omitted this frame,
/// simulating breakage.
const CHAIN_BREAK_CHANCE: f32 = 0.04;

/// Drop the depth coordinate for drawing.
fn project(p: Vec3) -> Vec2 {
    Vec2::new(p.x, p.y)
}

/// Draw one full frame in the fixed pass order.
pub fn draw_scene<C: Canvas, R: Rng>(
    canvas: &mut C,
    model: &HelixModel,
    options: &Options,
    rng: &mut R,
) {
    draw_background(canvas, options);
    if options.display.show_links {
        draw_proximity_links(canvas, model, options);
    }
    if options.display.show_bases {
        draw_base_pairs(canvas, model, options);
    }
    if options.display.show_backbone {
        draw_strand_chains(canvas, model, options, rng);
    }
    if options.display.show_particles {
        draw_particle_disks(canvas, model, options, rng);
    }
    if options.display.show_distant_links {
        draw_distant_links(canvas, model, options, rng);
    }
}

/// Pass 1: solid background fill.
fn draw_background<C: Canvas>(canvas: &mut C, options: &Options) {
    canvas.fill_rect(
        Vec2::ZERO,
        Vec2::new(params::SURFACE_WIDTH, params::SURFACE_HEIGHT),
        Rgba::from_rgb(options.colors.background, 1.0),
    );
}

/// Pass 2: short-range links from the model's rebuilt link sets.
///
/// Opacity decays with distance and falls off into the background with
/// depth. Each linked pair is drawn once.
fn draw_proximity_links<C: Canvas>(
    canvas: &mut C,
    model: &HelixModel,
    options: &Options,
) {
    for (i, particle) in model.backbone.iter().enumerate() {
        for &j in &particle.links {
            if j <= i {
                continue;
            }
            let a = model.backbone_points[i];
            let b = model.backbone_points[j];
            let dist = a.distance(b);
            let falloff = 1.0 - (dist / params::LINK_DISTANCE).min(1.0);
            let depth = depth_mix(
                (a.z + b.z) * 0.5,
                params::HELIX_RADIUS,
                0.15,
                0.55,
            );
            canvas.stroke_line(
                project(a),
                project(b),
                LINK_WIDTH,
                Rgba::from_rgb(options.colors.links, falloff * depth),
            );
        }
    }
}

/// Pass 3: base pairs, far-to-near.
///
/// The hydrogen-bond line is drawn only while the bond is intact; the
/// two base disks are drawn regardless of connection state.
fn draw_base_pairs<C: Canvas>(
    canvas: &mut C,
    model: &HelixModel,
    options: &Options,
) {
    let mid_z = |idx: usize| {
        let pts = model.pair_points[idx];
        (pts.a.z + pts.b.z) * 0.5
    };
    let mut order: Vec<usize> = (0..model.pairs.len()).collect();
    order.sort_by(|&i, &j| mid_z(i).total_cmp(&mid_z(j)));

    for idx in order {
        let pair = &model.pairs[idx];
        let pts = model.pair_points[idx];

        if pair.connected {
            let alpha = pair.opacity
                * pair.strength
                * depth_mix(mid_z(idx), params::HELIX_RADIUS, 0.25, 0.85);
            canvas.stroke_line(
                project(pts.a),
                project(pts.b),
                BOND_WIDTH,
                Rgba::from_rgb(options.colors.bonds, alpha),
            );
        }

        let color = options.colors.base_color(pair.kind);
        for p in [pts.a, pts.b] {
            let radius =
                pair.size * depth_mix(p.z, params::HELIX_RADIUS, 0.75, 1.2);
            let alpha = pair.opacity
                * depth_mix(p.z, params::HELIX_RADIUS, 0.3, 1.0);
            canvas.fill_circle(project(p), radius, Rgba::from_rgb(color, alpha));
        }
    }
}

/// Pass 4: backbone chain lines between adjacent indices.
///
/// A small random gate omits occasional segments; opacity follows depth
/// with extra per-segment jitter.
fn draw_strand_chains<C: Canvas, R: Rng>(
    canvas: &mut C,
    model: &HelixModel,
    options: &Options,
    rng: &mut R,
) {
    for (slot, strand) in [Strand::A, Strand::B].into_iter().enumerate() {
        let base = slot * params::PAIR_COUNT;
        let color = options.colors.strand_color(strand);
        for step in 0..params::PAIR_COUNT - 1 {
            if rng.random::<f32>() < CHAIN_BREAK_CHANCE {
                continue;
            }
            let a = model.backbone_points[base + step];
            let b = model.backbone_points[base + step + 1];
            let jitter = rng.random_range(0.85..1.15);
            let alpha = (depth_mix(
                (a.z + b.z) * 0.5,
                params::HELIX_RADIUS,
                0.2,
                0.7,
            ) * jitter)
                .min(1.0);
            canvas.stroke_line(
                project(a),
                project(b),
                CHAIN_WIDTH,
                Rgba::from_rgb(color, alpha),
            );
        }
    }
}

/// Pass 5: backbone particle disks, far-to-near.
///
/// Size and opacity follow depth, scaled by a per-frame random
/// multiplier for shimmer.
fn draw_particle_disks<C: Canvas, R: Rng>(
    canvas: &mut C,
    model: &HelixModel,
    options: &Options,
    rng: &mut R,
) {
    let mut order: Vec<usize> = (0..model.backbone.len()).collect();
    order.sort_by(|&i, &j| {
        model.backbone_points[i]
            .z
            .total_cmp(&model.backbone_points[j].z)
    });

    for i in order {
        let particle = &model.backbone[i];
        let p = model.backbone_points[i];
        let shimmer = rng.random_range(0.85..1.15);
        let radius = particle.size
            * depth_mix(p.z, params::HELIX_RADIUS, 0.7, 1.25)
            * shimmer;
        let alpha = (particle.opacity
            * depth_mix(p.z, params::HELIX_RADIUS, 0.35, 1.0)
            * shimmer)
            .min(1.0);
        canvas.fill_circle(
            project(p),
            radius,
            Rgba::from_rgb(options.colors.strand_color(particle.strand), alpha),
        );
    }
}

/// Pass 6: sparse long-range links.
///
/// Each particle scans the full set with low probability; in-range
/// candidates pass a further random gate and draw a faint line whose
/// opacity decays with distance and depth.
fn draw_distant_links<C: Canvas, R: Rng>(
    canvas: &mut C,
    model: &HelixModel,
    options: &Options,
    rng: &mut R,
) {
    let points = &model.backbone_points;
    for i in 0..points.len() {
        if rng.random::<f32>() >= params::DISTANT_SCAN_CHANCE {
            continue;
        }
        for j in 0..points.len() {
            if j == i {
                continue;
            }
            let dist = points[i].distance(points[j]);
            if dist >= params::DISTANT_LINK_DISTANCE
                || rng.random::<f32>() >= params::DISTANT_LINK_CHANCE
            {
                continue;
            }
            let falloff = 1.0 - dist / params::DISTANT_LINK_DISTANCE;
            let depth = depth_mix(
                (points[i].z + points[j].z) * 0.5,
                params::HELIX_RADIUS,
                0.08,
                0.3,
            );
            canvas.stroke_line(
                project(points[i]),
                project(points[j]),
                DISTANT_WIDTH,
                Rgba::from_rgb(options.colors.links, falloff * depth),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::tests::seeded_rng;
    use crate::render::canvas::recording::{Command, RecordingCanvas};

    fn advanced_model(seed: u64, ticks: u32) -> HelixModel {
        let mut rng = seeded_rng(seed);
        let mut model = HelixModel::new(&mut rng);
        for _ in 0..ticks {
            model.advance(&mut rng);
        }
        model
    }

    #[test]
    fn background_is_always_the_first_command() {
        let model = advanced_model(1, 3);
        let options = Options::default();
        let mut canvas = RecordingCanvas::default();
        let mut rng = seeded_rng(2);
        draw_scene(&mut canvas, &model, &options, &mut rng);

        match &canvas.commands[0] {
            Command::Rect { min, size, .. } => {
                assert_eq!(*min, Vec2::ZERO);
                assert_eq!(
                    *size,
                    Vec2::new(params::SURFACE_WIDTH, params::SURFACE_HEIGHT)
                );
            }
            other => panic!("expected background rect, got {other:?}"),
        }
    }

    #[test]
    fn every_entity_gets_a_disk() {
        // Base disks draw unconditionally (2 per pair) and particle disks
        // draw unconditionally (one per backbone particle).
        let model = advanced_model(3, 5);
        let options = Options::default();
        let mut canvas = RecordingCanvas::default();
        let mut rng = seeded_rng(4);
        draw_scene(&mut canvas, &model, &options, &mut rng);

        assert_eq!(canvas.circles(), params::PAIR_COUNT * 2 * 2);
    }

    #[test]
    fn disabled_passes_leave_only_the_background() {
        let model = advanced_model(5, 2);
        let options = Options {
            display: crate::options::DisplayOptions {
                show_links: false,
                show_bases: false,
                show_backbone: false,
                show_particles: false,
                show_distant_links: false,
            },
            ..Options::default()
        };

        let mut canvas = RecordingCanvas::default();
        let mut rng = seeded_rng(6);
        draw_scene(&mut canvas, &model, &options, &mut rng);
        assert_eq!(canvas.commands.len(), 1);
    }

    #[test]
    fn broken_bonds_draw_no_bond_lines() {
        let mut model = advanced_model(7, 1);
        for pair in &mut model.pairs {
            pair.connected = false;
        }
        let options = Options::default();
        let mut canvas = RecordingCanvas::default();
        let mut rng = seeded_rng(8);
        draw_scene(&mut canvas, &model, &options, &mut rng);

        assert_eq!(canvas.lines_with_width(BOND_WIDTH), 0);
        // Base disks still draw for every pair.
        assert_eq!(canvas.circles(), params::PAIR_COUNT * 2 * 2);
    }

    #[test]
    fn intact_bonds_each_draw_one_line() {
        let mut model = advanced_model(9, 1);
        for pair in &mut model.pairs {
            pair.connected = true;
        }
        let options = Options::default();
        let mut canvas = RecordingCanvas::default();
        let mut rng = seeded_rng(10);
        draw_scene(&mut canvas, &model, &options, &mut rng);

        assert_eq!(canvas.lines_with_width(BOND_WIDTH), params::PAIR_COUNT);
    }

    #[test]
    fn chain_segments_respect_the_omission_gate() {
        let model = advanced_model(11, 2);
        let options = Options::default();
        let mut canvas = RecordingCanvas::default();
        let mut rng = seeded_rng(12);
        draw_scene(&mut canvas, &model, &options, &mut rng);

        let chains = canvas.lines_with_width(CHAIN_WIDTH);
        let max = (params::PAIR_COUNT - 1) * 2;
        assert!(chains <= max);
        // The omission chance is 4%; losing half the segments would mean
        // the gate is wired backwards.
        assert!(chains > max / 2, "only {chains} of {max} segments drawn");
    }

    #[test]
    fn link_lines_match_the_link_sets() {
        let model = advanced_model(13, 4);
        let options = Options::default();
        let mut canvas = RecordingCanvas::default();
        let mut rng = seeded_rng(14);
        draw_scene(&mut canvas, &model, &options, &mut rng);

        let linked_pairs: usize = model
            .backbone
            .iter()
            .enumerate()
            .map(|(i, p)| p.links.iter().filter(|&&j| j > i).count())
            .sum();
        assert_eq!(canvas.lines_with_width(LINK_WIDTH), linked_pairs);
    }

    #[test]
    fn rungs_paint_far_to_near() {
        let model = advanced_model(15, 6);
        let options = Options::default();
        let mut canvas = RecordingCanvas::default();
        draw_base_pairs(&mut canvas, &model, &options);

        // Base disks come in (a, b) order per rung; recover the painted
        // rung order from the first disk of each pair of circles.
        let centers: Vec<Vec2> = canvas
            .commands
            .iter()
            .filter_map(|c| match c {
                Command::Circle { center, .. } => Some(*center),
                _ => None,
            })
            .step_by(2)
            .collect();

        let mut expected: Vec<usize> = (0..model.pairs.len()).collect();
        expected.sort_by(|&i, &j| {
            let zi = (model.pair_points[i].a.z + model.pair_points[i].b.z) * 0.5;
            let zj = (model.pair_points[j].a.z + model.pair_points[j].b.z) * 0.5;
            zi.total_cmp(&zj)
        });

        assert_eq!(centers.len(), expected.len());
        for (drawn, &idx) in centers.iter().zip(&expected) {
            let a = model.pair_points[idx].a;
            assert_eq!(*drawn, Vec2::new(a.x, a.y));
        }
    }
}
