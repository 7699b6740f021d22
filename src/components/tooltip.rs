use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub text: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// CSS-driven tooltip wrapper; the tip text rides along as a data attribute.
#[function_component(Tooltip)]
pub fn tooltip(p: &Props) -> Html {
    let mut class = classes!("tooltip");
    class.push(p.class.clone());
    html! {
        <span class={class} data-tip={p.text.clone()}>
            { for p.children.iter() }
        </span>
    }
}
