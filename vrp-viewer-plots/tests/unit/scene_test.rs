use super::*;
use crate::helpers::{create_test_dataset, create_test_dataset_with_routes};
use crate::{DELIVERY_COLOR, DEPOT_COLOR, PICKUP_COLOR, ROUTE_PALETTE};

const VIEWPORT: CanvasPoint = (800., 600.);

fn get_route_indices(primitives: &[Primitive]) -> Vec<usize> {
    primitives
        .iter()
        .filter_map(|primitive| match primitive {
            Primitive::RouteLine { route_index, .. } => Some(*route_index),
            _ => None,
        })
        .collect()
}

#[test]
fn can_render_routes_markers_and_selection_in_order() {
    let dataset = create_test_dataset();
    let selection = dataset.select(1).expect("cannot select");

    let primitives = render_scene(&dataset, &Projection::default(), Some(&selection), &RenderOptions::default());

    assert_eq!(
        primitives,
        vec![
            Primitive::RouteLine {
                route_index: 0,
                points: vec![(0., 600.), (40., 560.), (80., 600.), (0., 600.)],
                color: ROUTE_PALETTE[0],
                width: ROUTE_WIDTH,
            },
            Primitive::NodeMarker { node_id: 0, center: (0., 600.), radius: NODE_RADIUS, color: DEPOT_COLOR },
            Primitive::NodeMarker { node_id: 1, center: (40., 560.), radius: NODE_RADIUS, color: PICKUP_COLOR },
            Primitive::NodeMarker { node_id: 2, center: (80., 600.), radius: NODE_RADIUS, color: DELIVERY_COLOR },
            Primitive::SelectionRing {
                node_id: 1,
                center: (40., 560.),
                radius: SELECTION_RADIUS,
                color: SELECTION_COLOR,
                width: SELECTION_WIDTH,
            },
            Primitive::PartnerLink {
                from: (40., 560.),
                to: (80., 600.),
                color: PARTNER_LINK_COLOR,
                width: PARTNER_LINK_WIDTH,
                dash: PARTNER_LINK_DASH,
            },
        ]
    );
}

#[test]
fn can_render_ring_without_link_for_node_without_partner() {
    let dataset = create_test_dataset();
    let selection = dataset.select(0).expect("cannot select");

    let primitives = render_scene(&dataset, &Projection::default(), Some(&selection), &RenderOptions::default());

    assert!(matches!(primitives.last(), Some(Primitive::SelectionRing { node_id: 0, .. })));
    assert!(!primitives.iter().any(|primitive| matches!(primitive, Primitive::PartnerLink { .. })));
}

#[test]
fn can_skip_routes_with_unknown_ids_or_single_node() {
    let dataset = create_test_dataset_with_routes(vec![vec![0, 1, 0], vec![0, 42, 0], vec![0], vec![], vec![0, 2, 0]]);

    let primitives = render_scene(&dataset, &Projection::default(), None, &RenderOptions::default());

    assert_eq!(get_route_indices(&primitives), vec![0, 4]);
    assert_eq!(primitives.len(), 2 + 3);
}

#[test]
fn can_skip_idle_routes_when_requested() {
    let dataset = create_test_dataset_with_routes(vec![vec![0, 0], vec![0, 1, 2, 0]]);
    let options = RenderOptions { skip_idle_routes: true, ..RenderOptions::default() };

    assert_eq!(get_route_indices(&render_scene(&dataset, &Projection::default(), None, &options)), vec![1]);
    assert_eq!(
        get_route_indices(&render_scene(&dataset, &Projection::default(), None, &RenderOptions::default())),
        vec![0, 1]
    );
}

#[test]
fn can_color_routes_by_group() {
    let routes = (0..4).map(|_| vec![0, 1, 0]).collect();
    let dataset = create_test_dataset_with_routes(routes);
    let options = RenderOptions { grouping: RouteGrouping::Fixed(2), ..RenderOptions::default() };

    let colors = render_scene(&dataset, &Projection::default(), None, &options)
        .into_iter()
        .filter_map(|primitive| match primitive {
            Primitive::RouteLine { color, .. } => Some(color),
            _ => None,
        })
        .collect::<Vec<_>>();

    assert_eq!(colors, vec![ROUTE_PALETTE[0], ROUTE_PALETTE[0], ROUTE_PALETTE[1], ROUTE_PALETTE[1]]);
}

parameterized_test! {can_hit_node_marker, (point, expected), {
    let dataset = create_test_dataset();
    let primitives = render_scene(&dataset, &Projection::default(), None, &RenderOptions::default());

    assert_eq!(hit_test(&primitives, point), expected);
}}

can_hit_node_marker! {
    case_01_center: ((40., 560.), Some(1)),
    case_02_edge: ((44., 560.), Some(1)),
    case_03_outside: ((45., 560.), None),
    case_04_route_only: ((20., 580.), None),
    case_05_depot: ((1., 599.), Some(0)),
}

#[test]
fn can_hit_top_most_marker() {
    let primitives = vec![
        Primitive::NodeMarker { node_id: 1, center: (10., 10.), radius: 4., color: PICKUP_COLOR },
        Primitive::NodeMarker { node_id: 2, center: (12., 10.), radius: 4., color: DELIVERY_COLOR },
    ];

    assert_eq!(hit_test(&primitives, (11., 10.)), Some(2));
    assert_eq!(hit_test(&primitives, (7., 10.)), Some(1));
}

#[test]
fn can_split_line_into_dashes() {
    let segments = get_dash_segments((0., 0.), (20., 0.), 4., 4., VIEWPORT);

    assert_eq!(
        segments,
        vec![((0., 0.), (4., 0.)), ((8., 0.), (12., 0.)), ((16., 0.), (20., 0.))]
    );
}

#[test]
fn can_cut_last_dash_at_line_end() {
    let segments = get_dash_segments((0., 10.), (0., 0.), 4., 4., VIEWPORT);

    assert_eq!(segments, vec![((0., 10.), (0., 6.)), ((0., 2.), (0., 0.))]);
}

#[test]
fn can_return_no_dashes_for_degenerate_line() {
    assert!(get_dash_segments((5., 5.), (5., 5.), 4., 4., VIEWPORT).is_empty());
    assert!(get_dash_segments((0., 0.), (5., 5.), 0., 4., VIEWPORT).is_empty());
}

#[test]
fn can_dash_only_visible_part_of_long_link() {
    let segments = get_dash_segments((0., 0.), (33_554_432., 0.), 4., 4., VIEWPORT);

    assert_eq!(segments.len(), 100);
    assert_eq!(segments.first(), Some(&((0., 0.), (4., 0.))));
    assert_eq!(segments.last(), Some(&((792., 0.), (796., 0.))));
}

#[test]
fn can_keep_dash_phase_when_link_starts_off_canvas() {
    let segments = get_dash_segments((-10., 100.), (54., 100.), 4., 4., VIEWPORT);

    let xs = segments.iter().map(|((start, _), (end, _))| (*start, *end)).collect::<Vec<_>>();
    assert_eq!(xs, vec![(0., 2.), (6., 10.), (14., 18.), (22., 26.), (30., 34.), (38., 42.), (46., 50.)]);
    assert!(segments.iter().all(|((_, y1), (_, y2))| *y1 == 100. && *y2 == 100.));
}

#[test]
fn can_return_no_dashes_for_link_outside_of_canvas() {
    assert!(get_dash_segments((-100., -100.), (-10., -50.), 4., 4., VIEWPORT).is_empty());
}
