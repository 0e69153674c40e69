#[cfg(test)]
#[path = "../../tests/unit/commands/render_test.rs"]
mod render_test;

use super::*;
use clap::ArgAction;
use std::path::Path;
use vrp_viewer_core::models::CustomerId;
use vrp_viewer_plots::{DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, DEFAULT_SCALE};
use vrp_viewer_plots::{Projection, RenderOptions, RouteGrouping, render_scene, write_svg};

const NODE_ARG_NAME: &str = "node";
const WIDTH_ARG_NAME: &str = "width";
const HEIGHT_ARG_NAME: &str = "height";
const SCALE_ARG_NAME: &str = "scale";
const FIT_ARG_NAME: &str = "fit";
const GROUP_ARG_NAME: &str = "group";
const SKIP_IDLE_ROUTES_ARG_NAME: &str = "skip-idle-routes";

pub fn get_render_app() -> Command {
    let command = Command::new("render")
        .about("Renders routes of a step as svg, optionally with a selected node and its partner")
        .arg(Arg::new(NODE_ARG_NAME).help("Selects a node (customer) by id").short('n').long(NODE_ARG_NAME))
        .arg(Arg::new(WIDTH_ARG_NAME).help("Specifies canvas width, default is 800").long(WIDTH_ARG_NAME))
        .arg(Arg::new(HEIGHT_ARG_NAME).help("Specifies canvas height, default is 600").long(HEIGHT_ARG_NAME))
        .arg(Arg::new(SCALE_ARG_NAME).help("Specifies pixels per coordinate unit, default is 4").long(SCALE_ARG_NAME))
        .arg(
            Arg::new(FIT_ARG_NAME)
                .help("Fits scale into canvas instead of using a fixed one")
                .long(FIT_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(GROUP_ARG_NAME)
                .help("Specifies which routes share a color: 'none', 'fleet' or a group size")
                .long(GROUP_ARG_NAME),
        )
        .arg(
            Arg::new(SKIP_IDLE_ROUTES_ARG_NAME)
                .help("Hides routes which visit only depots")
                .long(SKIP_IDLE_ROUTES_ARG_NAME)
                .action(ArgAction::SetTrue),
        );

    add_out_result_arg(add_selection_args(add_source_args(command)), true)
}

pub fn run_render(matches: &ArgMatches) -> Result<(), String> {
    let out_path = matches.get_one::<String>(OUT_RESULT_ARG_NAME).ok_or("out result path is required")?;
    let node_id = parse_int_value::<CustomerId>(matches, NODE_ARG_NAME, "node id")?;

    let config = get_config(matches)?;
    let canvas = config.canvas.clone().unwrap_or_default();
    let width = parse_int_value::<u32>(matches, WIDTH_ARG_NAME, "canvas width")?
        .or(canvas.width)
        .unwrap_or(DEFAULT_CANVAS_WIDTH);
    let height = parse_int_value::<u32>(matches, HEIGHT_ARG_NAME, "canvas height")?
        .or(canvas.height)
        .unwrap_or(DEFAULT_CANVAS_HEIGHT);
    let scale = parse_float_value::<f64>(matches, SCALE_ARG_NAME, "scale")?.or(canvas.scale).unwrap_or(DEFAULT_SCALE);
    let is_fit = matches.get_flag(FIT_ARG_NAME) || canvas.fit.unwrap_or(false);

    if width == 0 || height == 0 || scale <= 0. {
        return Err(format!("canvas size and scale should be positive, got {width}x{height} with scale {scale}"));
    }

    let options = RenderOptions {
        grouping: match matches.get_one::<String>(GROUP_ARG_NAME) {
            Some(value) => value.parse::<RouteGrouping>()?,
            None => config.grouping.as_ref().map(RouteGrouping::from).unwrap_or_default(),
        },
        skip_idle_routes: matches.get_flag(SKIP_IDLE_ROUTES_ARG_NAME) || config.skip_idle_routes.unwrap_or(false),
    };

    let mut browser = SnapshotBrowser::new(matches, &config)?;
    browser.select_from_args(matches)?;

    if let Some(node_id) = node_id {
        browser.session_mut().click(node_id);
    }

    let session = browser.session();
    let dataset = session.loader().dataset().ok_or_else(|| browser.describe_no_data())?;

    let projection =
        if is_fit { Projection::fit(dataset.dataset(), width, height) } else { Projection::new(scale, height as f64) };

    let primitives = render_scene(dataset, &projection, session.selection(), &options);

    write_svg(Path::new(out_path), &primitives, width, height).map_err(|err| format!("cannot write svg: '{err}'"))
}
