#[cfg(test)]
#[path = "../tests/unit/scene_test.rs"]
mod scene_test;

use crate::{CanvasPoint, PARTNER_LINK_COLOR, Projection, Rgb, RouteGrouping, SELECTION_COLOR, get_node_color};
use vrp_viewer_core::models::{CustomerId, IndexedDataset, Selection};

/// Route line width.
pub const ROUTE_WIDTH: f64 = 2.;
/// Node marker radius.
pub const NODE_RADIUS: f64 = 4.;
/// Selection ring radius.
pub const SELECTION_RADIUS: f64 = 6.;
/// Selection ring stroke width.
pub const SELECTION_WIDTH: f64 = 2.;
/// Pickup/delivery link stroke width.
pub const PARTNER_LINK_WIDTH: f64 = 1.5;
/// Pickup/delivery link dash pattern: dash and gap lengths.
pub const PARTNER_LINK_DASH: (f64, f64) = (4., 4.);

/// A drawable item in canvas coordinates.
#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    /// A vehicle route as an open polyline.
    RouteLine {
        /// Index of the route in dataset.
        route_index: usize,
        /// Polyline points.
        points: Vec<CanvasPoint>,
        /// Stroke color.
        color: Rgb,
        /// Stroke width.
        width: f64,
    },
    /// A filled circle for a customer.
    NodeMarker {
        /// Customer id.
        node_id: CustomerId,
        /// Circle center.
        center: CanvasPoint,
        /// Circle radius.
        radius: f64,
        /// Fill color.
        color: Rgb,
    },
    /// An unfilled circle around the selected node.
    SelectionRing {
        /// Selected customer id.
        node_id: CustomerId,
        /// Circle center.
        center: CanvasPoint,
        /// Circle radius.
        radius: f64,
        /// Stroke color.
        color: Rgb,
        /// Stroke width.
        width: f64,
    },
    /// A dashed line between the selected node and its partner.
    PartnerLink {
        /// Selected node position.
        from: CanvasPoint,
        /// Partner node position.
        to: CanvasPoint,
        /// Stroke color.
        color: Rgb,
        /// Stroke width.
        width: f64,
        /// Dash and gap lengths.
        dash: (f64, f64),
    },
}

/// Controls scene rendering.
#[derive(Clone, Debug, Default)]
pub struct RenderOptions {
    /// Route color grouping.
    pub grouping: RouteGrouping,
    /// Omits routes which visit only depots.
    pub skip_idle_routes: bool,
}

/// Renders the dataset into primitives: route lines in route order, node markers in customer order, then the
/// selection ring and partner link.
///
/// A route referencing an unknown customer is omitted, the rest of the scene is rendered.
pub fn render_scene(
    dataset: &IndexedDataset,
    projection: &Projection,
    selection: Option<&Selection>,
    options: &RenderOptions,
) -> Vec<Primitive> {
    let vehicle_num_list = dataset.dataset().vehicle_num_list.as_slice();

    let routes = dataset.dataset().routes.iter().enumerate().filter_map(|(route_index, route)| {
        if route.len() < 2 || (options.skip_idle_routes && dataset.is_idle_route(route)) {
            return None;
        }

        let points = route.iter().map(|&id| dataset.coord(id).map(|coord| projection.project(coord)));
        let Some(points) = points.collect::<Option<Vec<_>>>() else {
            log::warn!("route {route_index} references unknown customer, skipping it");
            return None;
        };

        Some(Primitive::RouteLine {
            route_index,
            points,
            color: options.grouping.get_route_color(route_index, vehicle_num_list),
            width: ROUTE_WIDTH,
        })
    });

    let markers = dataset.dataset().customers.iter().map(|customer| Primitive::NodeMarker {
        node_id: customer.id,
        center: projection.project(customer.coord()),
        radius: NODE_RADIUS,
        color: get_node_color(customer.kind()),
    });

    let overlay = selection.into_iter().flat_map(|selection| {
        let center = projection.project(selection.coord);
        let ring = Primitive::SelectionRing {
            node_id: selection.node_id,
            center,
            radius: SELECTION_RADIUS,
            color: SELECTION_COLOR,
            width: SELECTION_WIDTH,
        };
        let link = selection.partner_coord.map(|partner_coord| Primitive::PartnerLink {
            from: center,
            to: projection.project(partner_coord),
            color: PARTNER_LINK_COLOR,
            width: PARTNER_LINK_WIDTH,
            dash: PARTNER_LINK_DASH,
        });

        std::iter::once(ring).chain(link)
    });

    routes.chain(markers).chain(overlay).collect()
}

/// Returns id of the top-most node marker which contains the point.
pub fn hit_test(primitives: &[Primitive], point: CanvasPoint) -> Option<CustomerId> {
    primitives.iter().rev().find_map(|primitive| match primitive {
        Primitive::NodeMarker { node_id, center, radius, .. } if get_distance(*center, point) <= *radius => {
            Some(*node_id)
        }
        _ => None,
    })
}

/// Splits a line into dash segments starting with a dash at `from`.
///
/// Only the part of the line inside the viewport, a rectangle from the origin to `viewport`, is dashed. Dashes keep
/// their phase relative to `from` and are cut at the viewport border and at the line end.
pub fn get_dash_segments(
    from: CanvasPoint,
    to: CanvasPoint,
    dash: f64,
    gap: f64,
    viewport: CanvasPoint,
) -> Vec<(CanvasPoint, CanvasPoint)> {
    let length = get_distance(from, to);
    if !(length > 0.) || !(dash > 0.) {
        return Vec::new();
    }

    let Some((visible_start, visible_end)) = clip_line(from, to, viewport) else {
        return Vec::new();
    };
    let (visible_start, visible_end) = (visible_start * length, visible_end * length);

    let period = dash + gap.max(0.);
    let point_at = |offset: f64| {
        let ratio = offset / length;
        (from.0 + (to.0 - from.0) * ratio, from.1 + (to.1 - from.1) * ratio)
    };

    ((visible_start / period).floor() as usize..)
        .map(|idx| idx as f64 * period)
        .take_while(|&start| start < visible_end)
        .filter_map(|start| {
            let (start, end) = (start.max(visible_start), (start + dash).min(visible_end));
            (start < end).then(|| (point_at(start), point_at(end)))
        })
        .collect()
}

/// Returns the parameter range of the line visible inside the viewport (Liang-Barsky).
fn clip_line(from: CanvasPoint, to: CanvasPoint, (width, height): CanvasPoint) -> Option<(f64, f64)> {
    let (dx, dy) = (to.0 - from.0, to.1 - from.1);

    [(-dx, from.0), (dx, width - from.0), (-dy, from.1), (dy, height - from.1)].into_iter().try_fold(
        (0., 1.),
        |(t0, t1): (f64, f64), (p, q)| {
            if p == 0. {
                return (q >= 0.).then_some((t0, t1));
            }

            let t = q / p;
            let (t0, t1) = if p < 0. { (t0.max(t), t1) } else { (t0, t1.min(t)) };

            (t0 <= t1).then_some((t0, t1))
        },
    )
}

fn get_distance(a: CanvasPoint, b: CanvasPoint) -> f64 {
    ((a.0 - b.0).powi(2) + (a.1 - b.1).powi(2)).sqrt()
}
