//! HTML pages and fragments.
//!
//! Every function here is a pure mapping from data to `Markup`; maud escapes
//! all spliced text. Pages go through [`layout`], fragments are returned bare
//! so htmx can swap them into an already-loaded page.

use maud::{html, Markup, DOCTYPE};
use todo_core::Todo;

const HTMX_SRC: &str = "https://unpkg.com/htmx.org@2.0.3";
const HTMX_SRI: &str = "sha384-0895/pl2MU10Hqc6jd4RvrthNlDiE9U1tWmX7WRESftEDRosgxNsQG/Ze9YMRzHq";
const BOOTSTRAP_CSS: &str = "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css";
const BOOTSTRAP_CSS_SRI: &str =
    "sha384-QWTKZyjpPEjISv5WaRU9OFeRpok6YctnYmDr5pNlyT2bRjXh0JMhjY6hW+ALEwIH";
const BOOTSTRAP_JS: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/js/bootstrap.bundle.min.js";
const BOOTSTRAP_JS_SRI: &str =
    "sha384-YvpcrYf0tY3lHB60NNkmXc5s9fDVZLESaAA55NDzOxhy9GkcIdslK1eN7N6jIeHz";

const DESCRIPTION: &str = "htmx interaction patterns";

/// Example pages listed on `/examples`, in display order.
pub const EXAMPLES: [&str; 5] = ["get", "target", "trigger", "swap", "select"];

/// Shown by `/bold` when `text` is missing or empty.
pub const BOLD_FALLBACK: &str = "Empty!";

/// Shown by the select example when `text` is missing or empty.
pub const SELECT_FALLBACK: &str = "Empty";

pub fn layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="UTF-8";
                title { (title) }
                meta name="description" content=(DESCRIPTION);
                script src=(HTMX_SRC) integrity=(HTMX_SRI) crossorigin="anonymous" {}
                link href=(BOOTSTRAP_CSS) rel="stylesheet" integrity=(BOOTSTRAP_CSS_SRI) crossorigin="anonymous";
                script src=(BOOTSTRAP_JS) integrity=(BOOTSTRAP_JS_SRI) crossorigin="anonymous" {}
            }
            body {
                main class="container mt-3" { (content) }
            }
        }
    }
}

pub fn examples_index() -> Markup {
    layout(
        "Examples",
        html! {
            ul {
                @for name in EXAMPLES {
                    li { a href={ "/examples/" (name) } { (name) } }
                }
                li { a href="/todos" { "todos" } }
            }
        },
    )
}

/// `hx-get`: the button replaces itself with the server time.
pub fn example_get() -> Markup {
    layout(
        "hx-get",
        html! {
            button type="button" hx-get="/date" { "Load Content" }
        },
    )
}

/// `hx-target`: the response lands in a separate container.
pub fn example_target() -> Markup {
    layout(
        "hx-target",
        html! {
            div id="content-container" { "No content yet." }
            button type="button" hx-get="/date" hx-target="#content-container" { "Load Content" }
        },
    )
}

/// `hx-trigger`: debounced keyup instead of the default trigger.
pub fn example_trigger() -> Markup {
    layout(
        "hx-trigger",
        html! {
            div id="content-container" { "No content yet." }
            input name="text" hx-get="/bold" hx-target="#content-container" hx-trigger="keyup delay:0.5s";
        },
    )
}

/// `hx-swap`: each submission is appended to the list.
pub fn example_swap() -> Markup {
    layout(
        "hx-swap",
        html! {
            ul id="my-list" {}
            form hx-post="/list-items" hx-target="#my-list" hx-swap="beforeend" {
                input type="text" name="name";
                input type="submit" value="Submit";
            }
        },
    )
}

/// `hx-select`: re-requests this same page and keeps only the container.
pub fn example_select(text: Option<&str>) -> Markup {
    let text = text.filter(|t| !t.is_empty()).unwrap_or(SELECT_FALLBACK);
    layout(
        "hx-select",
        html! {
            div id="content-container" {
                strong { (text) }
            }
            input name="text"
                hx-get="/examples/select"
                hx-select="#content-container"
                hx-target="#content-container"
                hx-trigger="keyup delay:0.5s";
        },
    )
}

pub fn date(millis: i64) -> Markup {
    html! { strong { (millis) } }
}

pub fn bold(text: Option<&str>) -> Markup {
    let text = text.filter(|t| !t.is_empty()).unwrap_or(BOLD_FALLBACK);
    html! { strong { (text) } }
}

pub fn list_item(name: &str) -> Markup {
    html! { li { (name) } }
}

/// One row of the todo list. Every todo mutation answers with this fragment.
pub fn todo_item(todo: &Todo) -> Markup {
    let path = todo.path();
    let completion = todo.completion_path();
    html! {
        li id=(todo.dom_id()) class="list-group-item d-flex align-items-center" {
            input type="checkbox"
                hx-target="closest li"
                hx-swap="outerHTML"
                hx-post=[(!todo.completed).then_some(&completion)]
                hx-delete=[todo.completed.then_some(&completion)]
                checked[todo.completed];
            div class="ms-2 flex-grow-1" { (todo.name) }
            button type="button" class="btn btn-sm btn-info"
                hx-get={ (path) "/edit-modal" }
                hx-target="#modals-here"
                data-bs-toggle="modal"
                data-bs-target="#modals-here" { "Edit" }
            button type="button" class="btn btn-sm btn-danger ms-1"
                hx-delete=(path)
                hx-target="closest li"
                hx-swap="delete" { "Delete" }
        }
    }
}

pub fn todos_page(todos: &[Todo]) -> Markup {
    layout(
        "Todos",
        html! {
            div style="max-width: 400px" {
                form hx-post="/todos" hx-target="#todos" hx-swap="beforeend"
                    hx-on-htmx-before-request="this.reset()" {
                    div class="form-group" {
                        label for="name" class="form-label" { "Name" }
                        input id="name" name="name" class="form-control" required;
                    }
                }
                hr;
                ul id="todos" class="list-group" {
                    @for todo in todos {
                        (todo_item(todo))
                    }
                }
            }
            div id="modals-here" class="modal modal-blur fade" aria-hidden="false" tabindex="-1" {
                div class="modal-dialog modal-lg modal-dialog-centered" role="document" {
                    div class="modal-content" {}
                }
            }
        },
    )
}

/// Bootstrap modal body with a rename form for `todo`.
pub fn edit_modal(todo: &Todo) -> Markup {
    html! {
        div class="modal-dialog modal-dialog-centered" {
            div class="modal-content" {
                div class="modal-header" {
                    h5 class="modal-title" { "Edit \"" (todo.name) "\"" }
                    button type="button" class="btn-close" data-bs-dismiss="modal" aria-label="Close" {}
                }
                div class="modal-body" {
                    form hx-put=(todo.path())
                        hx-target={ "#" (todo.dom_id()) }
                        hx-swap="outerHTML"
                        hx-on-htmx-after-request="bootstrap.Modal.getInstance('#modals-here').hide()" {
                        div class="form-group" {
                            label for="edit-name" class="form-label" { "Name" }
                            input id="edit-name" type="text" name="name" value=(todo.name) class="form-control" required;
                        }
                        button type="submit" class="btn btn-primary mt-3" { "Submit" }
                    }
                }
            }
        }
    }
}
