use leptos::*;

/// Notice shown in place of the share form when creating a meal fails.
#[component]
pub fn ErrorNotice() -> impl IntoView {
    view! {
        <main class="error">
            <h1>"An error occurred!"</h1>
            <p>
                "Failed to create meal."
                <br/>
                "Please try again later..."
            </p>
        </main>
    }
}

/// `ErrorBoundary` fallback. The collected errors are not shown.
pub fn meal_create_fallback(_errors: RwSignal<Errors>) -> impl IntoView {
    view! { <ErrorNotice/> }
}

#[component]
pub fn MealCreateBoundary(children: Children) -> impl IntoView {
    view! {
        <ErrorBoundary fallback=meal_create_fallback>
            {children()}
        </ErrorBoundary>
    }
}
