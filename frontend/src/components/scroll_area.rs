//! Scrollable viewport wrapper.
//!
//! The `NodeRef` comes from the owner; only the owner writes the
//! scroll offset.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ScrollAreaProps {
    pub node_ref: NodeRef,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(ScrollArea)]
pub fn scroll_area(props: &ScrollAreaProps) -> Html {
    html! {
        <div ref={props.node_ref.clone()} class={classes!("scroll-area", props.class.clone())}>
            { props.children.clone() }
        </div>
    }
}
