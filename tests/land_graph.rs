use land_graph::prelude::*;

/// Mainland Australian states and territories plus Tasmania.
fn australia() -> Graph<Land> {
    let names = ["WA", "NT", "SA", "Q", "NSW", "V", "T"];
    let borders = [
        ("WA", "NT"),
        ("WA", "SA"),
        ("NT", "SA"),
        ("NT", "Q"),
        ("SA", "Q"),
        ("SA", "NSW"),
        ("SA", "V"),
        ("Q", "NSW"),
        ("NSW", "V"),
    ];
    let mut graph = Graph::with_capacity(4);
    for name in names {
        graph.add_vertex(Land::new(name, Colour::None));
    }
    for (a, b) in borders {
        graph.add_edge(&uncoloured(a), &uncoloured(b));
    }
    graph
}

fn uncoloured(name: &str) -> Land {
    Land::new(name, Colour::None)
}

fn names<'a>(lands: impl IntoIterator<Item = &'a Land>) -> Vec<&'a str> {
    lands.into_iter().map(Land::name).collect()
}

#[test]
fn test_build_map() {
    let graph = australia();
    assert_eq!(graph.len(), 7);
    assert!(graph.capacity() >= 7);
    assert_eq!(graph.num_edges(), 9);
    assert_eq!(
        names(graph.vertex_neighbours(&uncoloured("SA"))),
        vec!["WA", "NT", "Q", "NSW", "V"]
    );
}

#[test]
fn test_island_disconnects_map() {
    let mut graph = australia();
    assert!(!graph.is_connected());
    assert_eq!(graph.bfs(&uncoloured("T")).count(), 1);

    graph.remove_vertex(&uncoloured("T")).unwrap();
    assert!(graph.is_connected());
}

#[test]
fn test_bfs_layers() {
    let graph = australia();
    let order = names(graph.bfs(&uncoloured("WA")));
    assert_eq!(order, vec!["WA", "NT", "SA", "Q", "NSW", "V"]);
}

#[test]
fn test_lookup_is_by_name_and_colour() {
    let graph = australia();
    assert!(graph.contains(&uncoloured("Q")));
    assert!(!graph.contains(&Land::new("Q", Colour::Red)));
    assert!(graph.vertex_neighbours(&Land::new("Q", Colour::Red)).is_empty());
}

#[test]
fn test_land_neighbours_are_independent_of_edges() {
    let mut graph = Graph::new();
    let mut wa = uncoloured("WA");
    wa.add_neighbour(uncoloured("NT"));
    graph.add_vertex(wa);
    graph.add_vertex(uncoloured("NT"));

    assert_eq!(graph.at(0).neighbours().len(), 1);
    assert!(graph.vertex_neighbours(&uncoloured("WA")).is_empty());
}

#[test]
fn test_removing_region_keeps_other_borders() {
    let mut graph = australia();
    let removed = graph.remove_vertex(&uncoloured("SA")).unwrap();
    assert_eq!(removed.map(|land| land.to_string()), Some("SA:NONE".to_string()));
    assert_eq!(graph.num_edges(), 4);
    assert_eq!(names(graph.vertex_neighbours(&uncoloured("NT"))), vec!["WA", "Q"]);
    assert_eq!(names(graph.vertex_neighbours(&uncoloured("V"))), vec!["NSW"]);
    assert!(graph.vertex_neighbours(&uncoloured("SA")).is_empty());
}

#[test]
fn test_empty_map_rejects_removal() {
    let mut graph = Graph::<Land>::new();
    let err = graph.remove_vertex(&uncoloured("WA")).unwrap_err();
    assert_eq!(err, GraphError::EmptyCollection("graph"));
    assert_eq!(err.to_string(), "the graph is empty");
    assert!(graph.remove_edge(&uncoloured("WA"), &uncoloured("NT")).is_err());
}

#[test]
fn test_colour_codes() {
    assert_eq!(Colour::from_code(3), Colour::Green);
    assert_eq!(Colour::from_code(99), Colour::None);
}

#[test]
fn test_display_uses_land_rendering() {
    let mut graph = Graph::new();
    graph.add_vertex(Land::new("NT", Colour::Red));
    graph.add_vertex(Land::new("Q", Colour::Green));
    graph.add_edge_at(0, 1);
    let rendered = graph.to_string();
    assert!(rendered.starts_with("Adjacency Matrix:\n"));
    assert!(rendered.contains("0\tNT:RED\t\tQ:GREEN \n"));
    assert!(rendered.contains("1\tQ:GREEN\t\tNT:RED \n"));
}
