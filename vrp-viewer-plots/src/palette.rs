#[cfg(test)]
#[path = "../tests/unit/palette_test.rs"]
mod palette_test;

use std::fmt;
use std::str::FromStr;
use vrp_viewer_core::config::GroupingConfig;
use vrp_viewer_core::models::NodeKind;

/// A color as red, green and blue components.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

/// Route colors in assignment order.
pub const ROUTE_PALETTE: [Rgb; 6] = [
    Rgb(0x00, 0x7B, 0xFF),
    Rgb(0x28, 0xA7, 0x45),
    Rgb(0xFF, 0xC1, 0x07),
    Rgb(0xDC, 0x35, 0x45),
    Rgb(0x6F, 0x42, 0xC1),
    Rgb(0x20, 0xC9, 0x97),
];

/// Pickup marker color.
pub const PICKUP_COLOR: Rgb = Rgb(0x28, 0xA7, 0x45);
/// Delivery marker color.
pub const DELIVERY_COLOR: Rgb = Rgb(0xFF, 0xC1, 0x07);
/// Depot marker color.
pub const DEPOT_COLOR: Rgb = Rgb(0x00, 0x7B, 0xFF);
/// Selection ring color.
pub const SELECTION_COLOR: Rgb = Rgb(0x00, 0x00, 0x00);
/// Pickup/delivery link color.
pub const PARTNER_LINK_COLOR: Rgb = Rgb(0xFF, 0x00, 0x00);

/// Returns marker color for the node kind.
pub fn get_node_color(kind: NodeKind) -> Rgb {
    match kind {
        NodeKind::Pickup => PICKUP_COLOR,
        NodeKind::Delivery => DELIVERY_COLOR,
        NodeKind::Depot => DEPOT_COLOR,
    }
}

/// Returns route color: `palette[(route_index / group_size) % palette.len()]`. A zero group size is treated as one.
pub fn get_route_color(route_index: usize, group_size: usize) -> Rgb {
    get_palette_color(route_index / group_size.max(1))
}

fn get_palette_color(group: usize) -> Rgb {
    ROUTE_PALETTE[group % ROUTE_PALETTE.len()]
}

/// Specifies which routes share a color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RouteGrouping {
    /// Each route is its own group.
    #[default]
    None,
    /// Each `n` consecutive routes form a group.
    Fixed(usize),
    /// Groups follow fleet sizes of the dataset (its `vehicle_num_list`).
    Fleet,
}

impl RouteGrouping {
    /// Returns group index of the route.
    ///
    /// In fleet mode, routes past the last fleet get a group each; an empty fleet list means no grouping.
    pub fn get_group(&self, route_index: usize, vehicle_num_list: &[usize]) -> usize {
        match self {
            RouteGrouping::None => route_index,
            RouteGrouping::Fixed(size) => route_index / (*size).max(1),
            RouteGrouping::Fleet if vehicle_num_list.is_empty() => route_index,
            RouteGrouping::Fleet => {
                let mut fleet_end = 0;
                for (fleet, &size) in vehicle_num_list.iter().enumerate() {
                    fleet_end += size;
                    if route_index < fleet_end {
                        return fleet;
                    }
                }

                vehicle_num_list.len() + (route_index - fleet_end)
            }
        }
    }

    /// Returns color of the route.
    pub fn get_route_color(&self, route_index: usize, vehicle_num_list: &[usize]) -> Rgb {
        get_palette_color(self.get_group(route_index, vehicle_num_list))
    }
}

impl FromStr for RouteGrouping {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "none" => Ok(RouteGrouping::None),
            "fleet" => Ok(RouteGrouping::Fleet),
            _ => match value.parse::<usize>() {
                Ok(size) if size > 0 => Ok(RouteGrouping::Fixed(size)),
                _ => Err(format!("unknown grouping: '{value}', expected 'none', 'fleet' or a positive group size")),
            },
        }
    }
}

impl From<&GroupingConfig> for RouteGrouping {
    fn from(config: &GroupingConfig) -> Self {
        match config {
            GroupingConfig::None => RouteGrouping::None,
            GroupingConfig::Fleet => RouteGrouping::Fleet,
            GroupingConfig::Fixed { size } => RouteGrouping::Fixed(*size),
        }
    }
}
