use crate::components::ui::{
    Badge, BadgeVariant, Button, ButtonSize, ButtonVariant, Card, CardContent, CardHeader,
    CardTitle, TabsList, TabsTrigger,
};
use crate::study::fixtures::MATERIAL_TITLE;
use crate::study::mindmap::{sample_tree, MindMapNode, ViewMode, Zoom};
use icons::{ChevronDown, ChevronRight};
use leptos::prelude::*;
use strum::IntoEnumIterator;

fn toggle_button(node: &MindMapNode, tree: RwSignal<MindMapNode>) -> AnyView {
    if !node.has_children() {
        return view! { <span class="inline-block size-5" /> }.into_any();
    }
    let id = node.id;
    let expanded = node.is_expanded();
    view! {
        <button
            type="button"
            class="inline-flex size-5 items-center justify-center rounded hover:bg-accent"
            aria-expanded=expanded.to_string()
            aria-label=if expanded { "Collapse" } else { "Expand" }
            on:click=move |_| tree.update(|t| *t = t.toggle(id))
        >
            {if expanded {
                view! { <ChevronDown class="size-4" /> }.into_any()
            } else {
                view! { <ChevronRight class="size-4" /> }.into_any()
            }}
        </button>
    }
    .into_any()
}

#[component]
fn TreeView(tree: RwSignal<MindMapNode>) -> impl IntoView {
    move || {
        tree.with(|root| {
            root.visible()
                .into_iter()
                .map(|(depth, node)| {
                    let indent = format!("padding-left: {}rem", depth as f64 * 1.5);
                    let label_class = if depth == 0 {
                        "text-lg font-semibold"
                    } else if node.has_children() {
                        "font-medium"
                    } else {
                        "text-muted-foreground"
                    };
                    view! {
                        <div class="flex items-center gap-2 py-1" style=indent>
                            {toggle_button(node, tree)}
                            <span class=label_class>{node.label}</span>
                        </div>
                    }
                })
                .collect_view()
        })
    }
}

fn flow_node(node: &MindMapNode, tree: RwSignal<MindMapNode>) -> AnyView {
    let children = if node.is_expanded() && node.has_children() {
        let inner = node
            .children
            .iter()
            .map(|c| flow_node(c, tree))
            .collect_view();
        Some(view! {
            <div class="mt-4 flex flex-wrap justify-center gap-4 border-t pt-4">{inner}</div>
        })
    } else {
        None
    };

    view! {
        <div class="flex flex-col items-center">
            <div class="flex items-center gap-1 rounded-md border bg-card px-3 py-2 text-sm shadow-xs">
                {toggle_button(node, tree)}
                <span>{node.label}</span>
            </div>
            {children}
        </div>
    }
    .into_any()
}

#[component]
fn FlowchartView(tree: RwSignal<MindMapNode>) -> impl IntoView {
    move || tree.with(|root| flow_node(root, tree))
}

#[component]
pub fn MindMapPage() -> impl IntoView {
    let tree: RwSignal<MindMapNode> = RwSignal::new(sample_tree());
    let mode: RwSignal<ViewMode> = RwSignal::new(ViewMode::default());
    let zoom: RwSignal<Zoom> = RwSignal::new(Zoom::default());

    let canvas_style = move || {
        format!(
            "transform: scale({}); transform-origin: top left;",
            zoom.get().scale()
        )
    };

    view! {
        <div class="space-y-6">
            <div class="flex items-center justify-between gap-4">
                <div class="space-y-2">
                    <h1 class="text-3xl font-bold tracking-tight">"Mind Map"</h1>
                    <p class="text-muted-foreground">"Visualize how the concepts connect"</p>
                </div>
                <Badge variant=BadgeVariant::Outline>{MATERIAL_TITLE}</Badge>
            </div>

            <Card>
                <CardHeader class="flex flex-row items-center justify-between gap-4">
                    <CardTitle>{move || tree.with(|t| t.label)}</CardTitle>
                    <div class="flex items-center gap-3">
                        <TabsList>
                            {ViewMode::iter()
                                .map(|m| view! {
                                    <TabsTrigger
                                        active=Signal::derive(move || mode.get() == m)
                                        on:click=move |_| mode.set(m)
                                    >
                                        {m.to_string()}
                                    </TabsTrigger>
                                })
                                .collect_view()}
                        </TabsList>
                        <div class="flex items-center gap-1">
                            <Button
                                variant=ButtonVariant::Outline
                                size=ButtonSize::Icon
                                attr:aria-label="Zoom out"
                                on:click=move |_| zoom.update(|z| *z = z.zoom_out())
                            >
                                "-"
                            </Button>
                            <span class="w-12 text-center text-sm tabular-nums">
                                {move || format!("{}%", zoom.get().percent())}
                            </span>
                            <Button
                                variant=ButtonVariant::Outline
                                size=ButtonSize::Icon
                                attr:aria-label="Zoom in"
                                on:click=move |_| zoom.update(|z| *z = z.zoom_in())
                            >
                                "+"
                            </Button>
                        </div>
                    </div>
                </CardHeader>
                <CardContent class="overflow-auto">
                    <div class="min-h-[400px] p-4" style=canvas_style>
                        {move || match mode.get() {
                            ViewMode::MindMap => view! { <TreeView tree=tree /> }.into_any(),
                            ViewMode::Flowchart => view! { <FlowchartView tree=tree /> }.into_any(),
                        }}
                    </div>
                </CardContent>
            </Card>
        </div>
    }
}
