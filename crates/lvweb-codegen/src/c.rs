//! LVGL C code generator.
//!
//! Emits the body of `ui_app.c`: static state, click callbacks, and a
//! `ui_build()` function that constructs the widget tree for the chosen
//! layout mode. All values are settled in the [`Plan`]; this module only
//! formats them.

use lvweb_parser::{parse_color, parse_length, pick_font, Document, Node};

use crate::layout::{ClickBehavior, Placement, Plan};

/// Screen background color.
const SCREEN_BG: u32 = 0x0b1d36;

/// Title label color in flow layout.
const TITLE_COLOR: u32 = 0x8ab4ff;

const MESSAGE_CB: &str = "btn_event_cb";
const LABEL_CB: &str = "btn_label_event_cb";

/// Generate the C source for a document.
pub fn generate(doc: &Document, plan: &Plan) -> String {
    let mut c = String::new();

    push_line(&mut c, "#include \"lvgl.h\"");
    push_line(&mut c, "");
    generate_state(plan, &mut c);
    push_line(&mut c, "");
    generate_callback(plan, &mut c);
    push_line(&mut c, "");

    push_line(&mut c, "void ui_build(void) {");
    generate_root(&mut c);
    if plan.use_absolute() {
        generate_absolute(doc, plan, &mut c);
    } else {
        generate_flow(plan, &mut c);
    }
    push_line(&mut c, "}");

    c
}

// =========================================================================
// Static state and callbacks
// =========================================================================

fn generate_state(plan: &Plan, out: &mut String) {
    push_line(out, "static lv_obj_t * display_label;");
    match plan.click {
        ClickBehavior::CycleMessages => {
            push_string_array(out, "messages", &plan.messages);
            push_line(out, "static int msg_idx = 0;");
        }
        ClickBehavior::ButtonLabel if plan.multi_buttons => {
            push_string_array(out, "btn_labels", &plan.button_labels);
        }
        ClickBehavior::ButtonLabel => {}
    }
}

fn generate_callback(plan: &Plan, out: &mut String) {
    match plan.click {
        ClickBehavior::CycleMessages => {
            push_line(out, &format!("static void {MESSAGE_CB}(lv_event_t * e) {{"));
            push_line(
                out,
                "  msg_idx = (msg_idx + 1) % (sizeof(messages)/sizeof(messages[0]));",
            );
            push_line(out, "  lv_label_set_text(display_label, messages[msg_idx]);");
        }
        ClickBehavior::ButtonLabel if plan.multi_buttons => {
            push_line(out, &format!("static void {LABEL_CB}(lv_event_t * e) {{"));
            push_line(out, "  intptr_t idx = (intptr_t)lv_event_get_user_data(e);");
            push_line(out, "  lv_label_set_text(display_label, btn_labels[idx]);");
        }
        ClickBehavior::ButtonLabel => {
            push_line(out, &format!("static void {LABEL_CB}(lv_event_t * e) {{"));
            push_line(
                out,
                "  const char * text = (const char *)lv_event_get_user_data(e);",
            );
            push_line(out, "  lv_label_set_text(display_label, text);");
        }
    }
    push_line(out, "}");
}

/// The `lv_obj_add_event_cb` statement for the `index`-th button.
fn event_binding(plan: &Plan, var: &str, index: usize, text: &str) -> String {
    let (callback, user_data) = match plan.click {
        ClickBehavior::CycleMessages => (MESSAGE_CB, "NULL".to_string()),
        ClickBehavior::ButtonLabel if plan.multi_buttons => {
            (LABEL_CB, format!("(void *)(intptr_t){index}"))
        }
        ClickBehavior::ButtonLabel => (LABEL_CB, format!("(void *){}", c_string(text))),
    };
    format!("lv_obj_add_event_cb({var}, {callback}, LV_EVENT_CLICKED, {user_data});")
}

// =========================================================================
// Root container
// =========================================================================

fn generate_root(out: &mut String) {
    push_line(out, "  lv_obj_t * layer = lv_layer_top();");
    push_line(out, "  lv_obj_t * scr = lv_obj_create(layer);");
    push_line(out, "  lv_obj_remove_style_all(scr);");
    push_line(out, "  lv_obj_set_size(scr, lv_pct(100), lv_pct(100));");
    push_line(
        out,
        &format!("  lv_obj_set_style_bg_color(scr, {}, 0);", c_color(SCREEN_BG)),
    );
    push_line(out, "  lv_obj_set_style_bg_opa(scr, LV_OPA_COVER, 0);");
    push_line(out, "  lv_obj_clear_flag(scr, LV_OBJ_FLAG_SCROLLABLE);");
    push_line(out, "  lv_obj_add_flag(scr, LV_OBJ_FLAG_CLICKABLE);");
}

// =========================================================================
// Flow layout
// =========================================================================

fn generate_flow(plan: &Plan, out: &mut String) {
    push_line(out, "  lv_obj_set_flex_flow(scr, LV_FLEX_FLOW_COLUMN);");
    push_line(
        out,
        "  lv_obj_set_flex_align(scr, LV_FLEX_ALIGN_CENTER, LV_FLEX_ALIGN_CENTER, LV_FLEX_ALIGN_CENTER);",
    );
    push_line(out, "  lv_obj_set_style_pad_all(scr, 20, 0);");
    push_line(out, "");

    push_line(out, "  lv_obj_t * title = lv_label_create(scr);");
    push_line(
        out,
        &format!("  lv_label_set_text(title, {});", c_string(&plan.title)),
    );
    push_line(
        out,
        &format!(
            "  lv_obj_set_style_text_color(title, {}, 0);",
            c_color(TITLE_COLOR)
        ),
    );
    push_line(out, "");

    push_line(out, "  display_label = lv_label_create(scr);");
    push_line(
        out,
        &format!(
            "  lv_label_set_text(display_label, {});",
            c_string(&plan.first_text)
        ),
    );
    push_line(
        out,
        "  lv_obj_set_style_text_font(display_label, LV_FONT_DEFAULT, 0);",
    );
    push_line(out, "  lv_obj_set_style_pad_bottom(display_label, 12, 0);");
    push_line(out, "");

    if plan.multi_buttons {
        generate_button_grid(plan, out);
    } else {
        generate_single_button(plan, out);
    }
}

fn generate_button_grid(plan: &Plan, out: &mut String) {
    push_line(out, "  lv_obj_t * grid = lv_obj_create(scr);");
    push_line(out, "  lv_obj_remove_style_all(grid);");
    push_line(out, "  lv_obj_set_size(grid, lv_pct(100), lv_pct(100));");
    push_line(out, "  lv_obj_set_style_bg_opa(grid, LV_OPA_TRANSP, 0);");
    push_line(out, "  lv_obj_set_style_pad_all(grid, 4, 0);");
    push_line(out, "  lv_obj_set_style_pad_row(grid, 4, 0);");
    push_line(out, "  lv_obj_set_style_pad_column(grid, 4, 0);");
    push_line(out, "  lv_obj_set_flex_flow(grid, LV_FLEX_FLOW_ROW_WRAP);");
    push_line(
        out,
        "  lv_obj_set_flex_align(grid, LV_FLEX_ALIGN_CENTER, LV_FLEX_ALIGN_START, LV_FLEX_ALIGN_START);",
    );
    push_line(out, "  lv_obj_set_flex_grow(grid, 1);");

    let grid = plan.grid;
    for (index, label) in plan.button_labels.iter().enumerate() {
        push_line(out, "  {");
        push_line(out, "    lv_obj_t * btn = lv_btn_create(grid);");
        push_line(
            out,
            &format!(
                "    lv_obj_set_size(btn, lv_pct({}), lv_pct({}));",
                grid.width_pct, grid.height_pct
            ),
        );
        push_line(out, "    lv_obj_t * btn_label = lv_label_create(btn);");
        push_line(
            out,
            &format!("    lv_label_set_text(btn_label, {});", c_string(label)),
        );
        push_line(out, "    lv_obj_center(btn_label);");
        push_line(
            out,
            &format!("    {}", event_binding(plan, "btn", index, label)),
        );
        push_line(out, "  }");
    }
}

fn generate_single_button(plan: &Plan, out: &mut String) {
    push_line(out, "  lv_obj_t * btn = lv_btn_create(scr);");
    push_line(out, "  lv_obj_set_size(btn, LV_SIZE_CONTENT, LV_SIZE_CONTENT);");
    push_line(out, "  lv_obj_set_style_pad_all(btn, 10, 0);");
    push_line(out, "  lv_obj_t * btn_label = lv_label_create(btn);");
    push_line(
        out,
        &format!(
            "  lv_label_set_text(btn_label, {});",
            c_string(&plan.button_text)
        ),
    );
    push_line(out, "  lv_obj_center(btn_label);");
    push_line(
        out,
        &format!("  {}", event_binding(plan, "btn", 0, &plan.button_text)),
    );
}

// =========================================================================
// Absolute layout
// =========================================================================

fn generate_absolute(doc: &Document, plan: &Plan, out: &mut String) {
    let mut display_assigned = false;
    let mut button_index = 0;

    for (index, node) in doc.nodes.iter().enumerate() {
        push_line(out, "");
        if node.tag.is_button() {
            generate_absolute_button(node, index, button_index, plan, out);
            button_index += 1;
        } else {
            let var = format!("label_{index}");
            generate_absolute_label(node, &var, out);
            if !display_assigned {
                push_line(out, &format!("  display_label = {var};"));
                display_assigned = true;
            }
        }
    }

    if !display_assigned {
        push_line(out, "");
        push_line(out, "  display_label = lv_label_create(scr);");
        push_line(
            out,
            &format!(
                "  lv_label_set_text(display_label, {});",
                c_string(&plan.first_text)
            ),
        );
        push_line(out, "  lv_obj_set_pos(display_label, 0, 0);");
    }
}

fn generate_absolute_label(node: &Node, var: &str, out: &mut String) {
    push_line(out, &format!("  lv_obj_t * {var} = lv_label_create(scr);"));
    push_line(
        out,
        &format!("  lv_label_set_text({var}, {});", c_string(&node.text)),
    );
    push_placement(out, var, Placement::of(node));
    push_text_style(out, var, node);
}

fn generate_absolute_button(
    node: &Node,
    index: usize,
    button_index: usize,
    plan: &Plan,
    out: &mut String,
) {
    let var = format!("btn_{index}");
    let label = format!("{var}_label");

    push_line(out, &format!("  lv_obj_t * {var} = lv_btn_create(scr);"));
    push_placement(out, &var, Placement::of(node));
    let background = node
        .style_value("background-color")
        .and_then(parse_color)
        .or_else(|| node.style_value("background").and_then(parse_color));
    if let Some(rgb) = background {
        push_line(
            out,
            &format!("  lv_obj_set_style_bg_color({var}, {}, 0);", c_color(rgb)),
        );
    }
    push_line(out, &format!("  lv_obj_t * {label} = lv_label_create({var});"));
    push_line(
        out,
        &format!("  lv_label_set_text({label}, {});", c_string(&node.text)),
    );
    push_text_style(out, &label, node);
    push_line(out, &format!("  lv_obj_center({label});"));
    push_line(
        out,
        &format!("  {}", event_binding(plan, &var, button_index, &node.text)),
    );
}

fn push_placement(out: &mut String, var: &str, placement: Placement) {
    push_line(
        out,
        &format!("  lv_obj_set_pos({var}, {}, {});", placement.x, placement.y),
    );
    push_line(
        out,
        &format!(
            "  lv_obj_set_size({var}, {}, {});",
            c_size(placement.width),
            c_size(placement.height)
        ),
    );
}

/// Text color and font from the node's `color` and `font-size`.
fn push_text_style(out: &mut String, var: &str, node: &Node) {
    if let Some(rgb) = node.style_value("color").and_then(parse_color) {
        push_line(
            out,
            &format!("  lv_obj_set_style_text_color({var}, {}, 0);", c_color(rgb)),
        );
    }
    let size = node.style_value("font-size").and_then(parse_length);
    if let Some(font) = pick_font(size) {
        push_line(
            out,
            &format!(
                "  lv_obj_set_style_text_font({var}, &{}, 0);",
                font.symbol()
            ),
        );
    }
}

// =========================================================================
// Literals
// =========================================================================

fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push('\n');
}

/// `static const char * name[] = { ... };`
fn push_string_array(out: &mut String, name: &str, items: &[String]) {
    let items: Vec<String> = items.iter().map(|s| c_string(s)).collect();
    push_line(
        out,
        &format!(
            "static const char * {name}[] = {{\n  {}\n}};",
            items.join(",\n  ")
        ),
    );
}

/// Quote `s` as a C string literal.
///
/// Non-ASCII text is passed through as UTF-8; control characters use octal
/// escapes, which never swallow a following digit beyond three.
pub fn c_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            // Break `??` so it can never form a trigraph.
            '?' if out.ends_with('?') => out.push_str("\\?"),
            c if (c as u32) < 0x20 || c as u32 == 0x7f => {
                out.push_str(&format!("\\{:03o}", c as u32));
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// `lv_color_hex(0xrrggbb)`
pub fn c_color(rgb: u32) -> String {
    format!("lv_color_hex(0x{rgb:06x})")
}

fn c_size(px: Option<i32>) -> String {
    px.map_or_else(|| "LV_SIZE_CONTENT".to_string(), |v| v.to_string())
}
