//! Control tree dump for diagnostics.

use std::fmt::Write;

use crate::widget::{Control, ControlId, ControlTree};

/// Render the subtree under `root`, one control per line, children indented.
///
/// With `visible_only`, hidden controls and controls on inactive pages are
/// left out along with their children.
pub fn format_tree(tree: &ControlTree, root: ControlId, filter: Option<&str>, visible_only: bool) -> String {
    let mut out = String::new();
    write_control(tree, root, 0, filter, visible_only, &mut out);
    out
}

/// Print the subtree under `root` to stdout.
pub fn print_tree(tree: &ControlTree, root: ControlId, filter: Option<&str>, visible_only: bool) {
    print!("{}", format_tree(tree, root, filter, visible_only));
}

fn write_control(
    tree: &ControlTree,
    id: ControlId,
    depth: usize,
    filter: Option<&str>,
    visible_only: bool,
    out: &mut String,
) {
    let Some(c) = tree.get(id) else { return };
    let shown = c.visible && !c.disposed && tree.is_on_active_page(id);
    if visible_only && !shown {
        return;
    }

    let kind = c.widget.kind().as_str();
    let matches_filter = filter
        .map(|f| kind.to_lowercase().contains(&f.to_lowercase()))
        .unwrap_or(true);
    if matches_filter {
        write_line(tree, c, depth, shown, out);
    }

    for &child in &c.children {
        write_control(tree, child, depth + 1, filter, visible_only, out);
    }
}

fn write_line(tree: &ControlTree, c: &Control, depth: usize, shown: bool, out: &mut String) {
    let indent = "  ".repeat(depth);
    let abs = tree.absolute_position(c.id);
    let vis = if shown { "visible" } else { "hidden" };
    let page = if c.page > 0 { format!(" page={}", c.page) } else { String::new() };
    let text = c
        .widget
        .text()
        .map(|t| format!(" text={:?}", t))
        .unwrap_or_default();
    let _ = writeln!(
        out,
        "{indent}{} #{} ({}x{}) at ({},{}) {vis}{page}{text}{}",
        c.widget.kind().as_str(),
        c.id.0,
        c.width,
        c.height,
        abs.x,
        abs.y,
        format_flags(c),
    );
}

fn format_flags(c: &Control) -> String {
    let mut flags = Vec::new();
    if let Some(info) = &c.gump {
        flags.push(format!("layer={}", info.layer.as_str()));
        if info.active_page > 0 {
            flags.push(format!("active_page={}", info.active_page));
        }
        if info.modal {
            flags.push("modal".into());
        }
        if info.block_movement {
            flags.push("nomove".into());
        }
    }
    if let Some(serial) = c.local_serial {
        flags.push(format!("serial=0x{:X}", serial));
    }
    if c.is_transparent {
        flags.push(format!("alpha={:.2}", c.alpha));
    }
    if c.tooltip.is_some() {
        flags.push("tooltip".into());
    }
    if flags.is_empty() {
        String::new()
    } else {
        format!(" [{}]", flags.join(" "))
    }
}
