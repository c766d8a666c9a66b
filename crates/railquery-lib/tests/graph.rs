use railquery_lib::{Error, Graph, Route};

#[test]
fn parse_builds_adjacency_in_specification_order() {
    let graph = Graph::parse("AB5,AD5,AE7,BC4").expect("valid spec");

    let targets: Vec<_> = graph
        .neighbours('A')
        .iter()
        .map(|edge| (edge.to, edge.weight))
        .collect();
    assert_eq!(targets, vec![('B', 5), ('D', 5), ('E', 7)]);
    assert_eq!(graph.edge_count(), 4);
}

#[test]
fn parse_drops_malformed_tokens() {
    let graph = Graph::parse("AB5, bc4, ABC1, B7, CD8 ,").expect("two valid tokens remain");

    assert_eq!(graph.edge_count(), 2);
    assert_eq!(graph.direct_edge('A', 'B'), Some(5));
    assert_eq!(graph.direct_edge('C', 'D'), Some(8));
}

#[test]
fn parse_tolerates_surrounding_whitespace() {
    let graph = Graph::parse("AB5, BC4,\nCD8\n").expect("trimmed tokens are valid");
    assert_eq!(graph.edge_count(), 3);
}

#[test]
fn duplicate_tokens_merge_silently() {
    let graph = Graph::parse("AB5,AB5,BC4").expect("duplicate merges");
    assert_eq!(graph.edge_count(), 2);
    assert_eq!(graph.neighbours('A').len(), 1);
}

#[test]
fn conflicting_duplicate_weights_are_rejected() {
    let err = Graph::parse("AB5,AB3").expect_err("conflicting weights");
    assert_eq!(err, Error::ConflictingEdge { from: 'A', to: 'B' });
}

#[test]
fn zero_weight_edges_are_rejected() {
    let err = Graph::parse("AB5,BC0").expect_err("zero weight");
    assert_eq!(
        err,
        Error::ZeroWeightEdge {
            token: "BC0".to_string()
        }
    );
}

#[test]
fn empty_specification_is_rejected() {
    assert_eq!(Graph::parse("").expect_err("no edges"), Error::EmptyGraph);
    assert_eq!(
        Graph::parse("not,a,graph").expect_err("no valid edges"),
        Error::EmptyGraph
    );
}

#[test]
fn edge_direction_matters() {
    let graph = Graph::parse("AB5").expect("valid spec");
    assert_eq!(graph.direct_edge('A', 'B'), Some(5));
    assert_eq!(graph.direct_edge('B', 'A'), None);
}

#[test]
fn target_only_stations_exist_with_no_outgoing_edges() {
    let graph = Graph::parse("AB5").expect("valid spec");

    assert!(graph.neighbours('B').is_empty());
    let mut stations: Vec<_> = graph.stations().collect();
    stations.sort_unstable();
    assert_eq!(stations, vec!['A', 'B']);
}

#[test]
fn unknown_stations_have_no_outgoing_edges() {
    let graph = Graph::parse("AB5").expect("valid spec");
    assert!(graph.neighbours('Z').is_empty());
}

#[test]
fn route_notation_round_trips() {
    let route: Route = "A-B-C".parse().expect("valid notation");
    assert_eq!(route.stations(), &['A', 'B', 'C']);
    assert_eq!(route.hops(), 2);
    assert_eq!(route.to_string(), "A-B-C");
}

#[test]
fn single_station_route_has_no_hops() {
    let route: Route = "A".parse().expect("valid notation");
    assert_eq!(route.hops(), 0);
}

#[test]
fn route_notation_rejects_bad_stations() {
    assert_eq!(
        "A-bb-C".parse::<Route>().expect_err("lowercase pair"),
        Error::InvalidStation {
            token: "bb".to_string()
        }
    );
    assert_eq!("".parse::<Route>().expect_err("empty"), Error::EmptyRoute);
}
