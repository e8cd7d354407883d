//! Maud components for the page shell and the swappable fragments. Each item
//! row embeds the toggle and delete URLs for its own id, which is how the
//! client knows what to call next.

use maud::{html, Markup, DOCTYPE};

use crate::models::Todo;

/// One todo row. The checkbox posts the toggle route, the button issues the
/// delete, and both swap out the closest row.
pub fn todo_item(todo: &Todo) -> Markup {
    html! {
        div class="flex flex-row items-center space-x-3 bg-white rounded-lg shadow my-2 py-2 px-4" {
            p class="flex-grow" { (todo.content) }
            input type="checkbox" checked[todo.completed]
                hx-post={ "/todos/toggle/" (todo.id) }
                hx-target="closest div"
                hx-swap="outerHTML";
            button class="text-red-500 font-bold"
                hx-delete={ "/todos/" (todo.id) }
                hx-target="closest div"
                hx-swap="outerHTML" { "X" }
        }
    }
}

/// The add form. New rows land right before the form, keeping it last in the
/// list container.
pub fn todo_form() -> Markup {
    html! {
        form class="flex flex-row space-x-3 mt-4"
            hx-post="/todos"
            hx-swap="beforebegin"
            "hx-on::after-request"="this.reset()" {
            input class="border border-black rounded-md p-2" type="text" name="content" placeholder="New todo";
            button class="bg-blue-500 hover:bg-blue-700 text-white font-bold py-2 px-4 rounded" type="submit" { "Add" }
        }
    }
}

pub fn todo_list(todos: &[Todo]) -> Markup {
    html! {
        div class="flex flex-col" {
            @for todo in todos {
                (todo_item(todo))
            }
            (todo_form())
        }
    }
}

/// Full document. The body fetches the live list as soon as it loads.
pub fn page() -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { "Todos" }
                script src="https://unpkg.com/htmx.org@1.9.10" {}
                script src="https://cdn.tailwindcss.com" {}
            }
            body class="flex w-full h-screen justify-center items-center bg-gray-100 font-sans"
                hx-get="/todos"
                hx-trigger="load"
                hx-swap="innerHTML" {}
        }
    }
}
