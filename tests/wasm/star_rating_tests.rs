use cinerate_web::components::star_rating::{Props, StarRating};
use cinerate_web::dom;
use gloo::timers::future::TimeoutFuture;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use yew::prelude::*;

wasm_bindgen_test_configure!(run_in_browser);

fn mount_root() -> web_sys::Element {
    let doc = dom::document().expect("document should exist in browser tests");
    let root = doc.create_element("div").expect("create mount node");
    doc.body()
        .expect("body should exist")
        .append_child(&root)
        .expect("attach mount node");
    root
}

// Let the scheduler flush pending renders before asserting on the DOM.
async fn settle() {
    TimeoutFuture::new(50).await;
}

fn star_button(root: &web_sys::Element, index: u32) -> web_sys::HtmlElement {
    root.query_selector_all("button")
        .expect("query star buttons")
        .item(index)
        .expect("star button present")
        .dyn_into::<web_sys::HtmlElement>()
        .expect("star is an element")
}

#[wasm_bindgen_test]
async fn clicking_a_star_commits_it_and_notifies_once() {
    let calls = Rc::new(Cell::new(0_u32));
    let last_rating = Rc::new(Cell::new(0_u32));
    let on_rate = {
        let calls = calls.clone();
        let last_rating = last_rating.clone();
        Callback::from(move |rating: u32| {
            calls.set(calls.get() + 1);
            last_rating.set(rating);
        })
    };

    let root = mount_root();
    let props = Props {
        max: 5,
        initial: 0.0,
        read_only: false,
        show_text: true,
        on_rate,
    };
    yew::Renderer::<StarRating>::with_root_and_props(root.clone(), props).render();
    settle().await;

    let buttons = root.query_selector_all("button").expect("query star buttons");
    assert_eq!(buttons.length(), 5, "one button per star");

    star_button(&root, 3).click();
    settle().await;

    assert_eq!(calls.get(), 1, "one click must notify exactly once");
    assert_eq!(last_rating.get(), 4, "callback carries the clicked position");

    let full = root
        .query_selector_all(".star--full")
        .expect("query full stars")
        .length();
    assert_eq!(full, 4, "stars up to the clicked position render full");
    let text = root.text_content().unwrap_or_default();
    assert!(text.contains("4/5"), "label shows the committed rating: {text}");
}

#[wasm_bindgen_test]
async fn second_click_recommits_and_notifies_again() {
    let calls = Rc::new(Cell::new(0_u32));
    let on_rate = {
        let calls = calls.clone();
        Callback::from(move |_: u32| calls.set(calls.get() + 1))
    };

    let root = mount_root();
    let props = Props {
        max: 5,
        initial: 0.0,
        read_only: false,
        show_text: true,
        on_rate,
    };
    yew::Renderer::<StarRating>::with_root_and_props(root.clone(), props).render();
    settle().await;

    star_button(&root, 4).click();
    settle().await;
    star_button(&root, 1).click();
    settle().await;

    assert_eq!(calls.get(), 2, "each click notifies exactly once");
    let full = root
        .query_selector_all(".star--full")
        .expect("query full stars")
        .length();
    assert_eq!(full, 2, "the later, lower pick wins");
    let text = root.text_content().unwrap_or_default();
    assert!(text.contains("2/5"), "label follows the latest commit: {text}");
}

#[wasm_bindgen_test]
async fn read_only_widget_has_no_click_targets() {
    let root = mount_root();
    let props = Props {
        max: 5,
        initial: 3.5,
        read_only: true,
        show_text: true,
        on_rate: Callback::noop(),
    };
    yew::Renderer::<StarRating>::with_root_and_props(root.clone(), props).render();
    settle().await;

    let buttons = root.query_selector_all("button").expect("query buttons");
    assert_eq!(buttons.length(), 0, "read-only mode attaches no listeners");
    let stars = root.query_selector_all(".star").expect("query stars");
    assert_eq!(stars.length(), 5);
    let half = root.query_selector_all(".star--half").expect("query half stars");
    assert_eq!(half.length(), 1);
}
