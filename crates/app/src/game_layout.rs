//! Layout model for the fight screen's panels.

use taffy::TaffyTree;
use taffy::prelude::*;

pub struct LayoutNodes {
    root: NodeId,
    header: NodeId,
    fighters_row: NodeId,
    player: NodeId,
    enemy: NodeId,
    info: NodeId,
    footer: NodeId,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanelRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

pub struct FrameLayout {
    pub header: PanelRect,
    pub player: PanelRect,
    pub enemy: PanelRect,
    pub info: PanelRect,
    pub footer: PanelRect,
}

pub fn setup_layout(taffy: &mut TaffyTree<()>) -> LayoutNodes {
    let header = taffy
        .new_leaf(Style {
            size: Size { width: percent(1.0), height: length(40.0) },
            margin: taffy::Rect { left: zero(), right: zero(), top: zero(), bottom: length(20.0) },
            ..Default::default()
        })
        .expect("header node");
    let player =
        taffy.new_leaf(Style { flex_grow: 1.0, ..Default::default() }).expect("player node");
    let enemy = taffy
        .new_leaf(Style {
            flex_grow: 1.0,
            margin: taffy::Rect { left: length(20.0), right: zero(), top: zero(), bottom: zero() },
            ..Default::default()
        })
        .expect("enemy node");
    let fighters_row = taffy
        .new_with_children(
            Style {
                display: Display::Flex,
                flex_direction: FlexDirection::Row,
                size: Size { width: percent(1.0), height: length(140.0) },
                margin: taffy::Rect {
                    left: zero(),
                    right: zero(),
                    top: zero(),
                    bottom: length(20.0),
                },
                ..Default::default()
            },
            &[player, enemy],
        )
        .expect("fighters row node");
    let info = taffy
        .new_leaf(Style {
            flex_grow: 1.0,
            margin: taffy::Rect { left: zero(), right: zero(), top: zero(), bottom: length(20.0) },
            ..Default::default()
        })
        .expect("info node");
    let footer = taffy
        .new_leaf(Style {
            size: Size { width: percent(1.0), height: length(30.0) },
            ..Default::default()
        })
        .expect("footer node");
    let root = taffy
        .new_with_children(
            Style {
                display: Display::Flex,
                flex_direction: FlexDirection::Column,
                size: Size { width: percent(1.0), height: percent(1.0) },
                padding: taffy::Rect {
                    left: length(20.0),
                    right: length(20.0),
                    top: length(20.0),
                    bottom: length(20.0),
                },
                ..Default::default()
            },
            &[header, fighters_row, info, footer],
        )
        .expect("root node");
    LayoutNodes { root, header, fighters_row, player, enemy, info, footer }
}

pub fn compute_frame_layout(
    taffy: &mut TaffyTree<()>,
    nodes: &LayoutNodes,
    viewport_width: f32,
    viewport_height: f32,
) -> FrameLayout {
    let available_size = Size {
        width: AvailableSpace::Definite(viewport_width),
        height: AvailableSpace::Definite(viewport_height),
    };
    taffy.compute_layout(nodes.root, available_size).expect("compute layout");

    let l_root = taffy.layout(nodes.root).expect("root layout");
    let l_header = taffy.layout(nodes.header).expect("header layout");
    let l_row = taffy.layout(nodes.fighters_row).expect("fighters row layout");
    let l_player = taffy.layout(nodes.player).expect("player layout");
    let l_enemy = taffy.layout(nodes.enemy).expect("enemy layout");
    let l_info = taffy.layout(nodes.info).expect("info layout");
    let l_footer = taffy.layout(nodes.footer).expect("footer layout");

    FrameLayout {
        header: panel_rect(l_header, &[l_root]),
        player: panel_rect(l_player, &[l_root, l_row]),
        enemy: panel_rect(l_enemy, &[l_root, l_row]),
        info: panel_rect(l_info, &[l_root]),
        footer: panel_rect(l_footer, &[l_root]),
    }
}

fn panel_rect(layout: &taffy::Layout, parents: &[&taffy::Layout]) -> PanelRect {
    let mut x = layout.location.x;
    let mut y = layout.location.y;
    for parent in parents {
        x += parent.location.x;
        y += parent.location.y;
    }

    PanelRect { x, y, width: layout.size.width, height: layout.size.height }
}
