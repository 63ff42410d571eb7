use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AssignmentsSkeletonProps {
    pub count: usize,
}

#[function_component(AssignmentsSkeleton)]
pub fn assignments_skeleton(props: &AssignmentsSkeletonProps) -> Html {
    html! {
        <>
            { for (0..props.count).map(|i| html! {
                <div key={i} class="assignment-card skeleton">
                    <div class="skeleton-thumb" />
                    <div class="skeleton-line" />
                    <div class="skeleton-line short" />
                </div>
            }) }
        </>
    }
}
