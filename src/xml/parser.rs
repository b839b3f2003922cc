//! Parser für Graph-Dokumente.

use super::error::{GraphFileError, SCHEMA_VERSION};
use super::ROOT_TAG;
use crate::core::{Graph, NodeId};
use glam::Vec2;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::collections::HashMap;

/// Eintrag für eine leere Nachbarliste.
const NO_NEIGHBORS_MARKER: &str = "-1";

/// Parsed ein Graph-Dokument aus einem XML-String.
///
/// Das Ergebnis hat keine Selektion. Die Kantenliste entsteht aus den
/// Nachbarlisten, jedes ungeordnete Paar genau einmal. Nur einseitig
/// eingetragene Nachbarschaften werden symmetrisch ergänzt,
/// Selbstreferenzen verworfen.
pub fn parse_graph_document(xml_content: &str) -> Result<Graph, GraphFileError> {
    let mut reader = Reader::from_str(xml_content);
    reader.config_mut().trim_text(true);

    let mut buffer = Vec::new();

    let mut root_seen = false;
    let mut nodes_seen = false;
    let mut in_nodes = false;
    let mut current_tag: Option<String> = None;

    let mut ids_text = String::new();
    let mut x_text = String::new();
    let mut y_text = String::new();
    let mut neighbors_text = String::new();

    loop {
        match reader.read_event_into(&mut buffer) {
            Ok(Event::Start(ref e)) => {
                let name = e.name();
                let tag = reader
                    .decoder()
                    .decode(name.as_ref())
                    .map_err(GraphFileError::malformed)?;

                if !root_seen {
                    check_root(&reader, e, &tag)?;
                    root_seen = true;
                } else if tag == "nodes" {
                    nodes_seen = true;
                    in_nodes = true;
                } else if in_nodes {
                    current_tag = Some(tag.into_owned());
                }
            }
            Ok(Event::Empty(ref e)) => {
                let name = e.name();
                let tag = reader
                    .decoder()
                    .decode(name.as_ref())
                    .map_err(GraphFileError::malformed)?;

                if !root_seen {
                    check_root(&reader, e, &tag)?;
                    root_seen = true;
                } else if tag == "nodes" {
                    // <nodes/> = leeres Dokument
                    nodes_seen = true;
                }
            }
            Ok(Event::Text(e)) => {
                if in_nodes {
                    let text = e.xml_content().map_err(GraphFileError::malformed)?;
                    match current_tag.as_deref() {
                        Some("id") => ids_text.push_str(&text),
                        Some("x") => x_text.push_str(&text),
                        Some("y") => y_text.push_str(&text),
                        Some("neighbors") => neighbors_text.push_str(&text),
                        _ => {}
                    }
                }
            }
            Ok(Event::End(ref e)) => {
                let name = e.name();
                let tag = reader
                    .decoder()
                    .decode(name.as_ref())
                    .map_err(GraphFileError::malformed)?;
                if tag == "nodes" {
                    in_nodes = false;
                } else if current_tag.as_deref() == Some(tag.as_ref()) {
                    current_tag = None;
                }
            }
            Ok(Event::Eof) => break,
            Err(err) => {
                return Err(GraphFileError::malformed(format!(
                    "Fehler beim Parsen des XML an Position {}: {}",
                    reader.error_position(),
                    err
                )))
            }
            _ => {}
        }

        buffer.clear();
    }

    if !root_seen {
        return Err(GraphFileError::malformed(format!(
            "Kein <{}>-Wurzelelement gefunden",
            ROOT_TAG
        )));
    }
    if !nodes_seen {
        return Err(GraphFileError::malformed("Pflichtelement <nodes> fehlt"));
    }

    let ids = parse_list::<u64>(&ids_text, "id")?;
    let xs = parse_coordinates(&x_text, "x")?;
    let ys = parse_coordinates(&y_text, "y")?;
    let neighbors = parse_nested_list(&neighbors_text)?;

    let expected_len = ids.len();
    if xs.len() != expected_len || ys.len() != expected_len || neighbors.len() != expected_len {
        return Err(GraphFileError::malformed(format!(
            "Längen der Knoten-Listen stimmen nicht überein (id: {}, x: {}, y: {}, neighbors: {})",
            expected_len,
            xs.len(),
            ys.len(),
            neighbors.len()
        )));
    }

    build_graph(&ids, &xs, &ys, &neighbors)
}

fn build_graph(
    ids: &[u64],
    xs: &[f32],
    ys: &[f32],
    neighbors: &[Vec<u64>],
) -> Result<Graph, GraphFileError> {
    let mut id_to_index: HashMap<u64, usize> = HashMap::with_capacity(ids.len());
    for (index, id) in ids.iter().enumerate() {
        if id_to_index.insert(*id, index).is_some() {
            return Err(GraphFileError::malformed(format!(
                "Knoten-ID {} kommt mehrfach vor",
                id
            )));
        }
    }

    let mut graph = Graph::new();
    let node_ids: Vec<NodeId> =
        graph.add_nodes(xs.iter().zip(ys).map(|(x, y)| Vec2::new(*x, *y)));

    let mut self_references = 0usize;
    let mut repaired = 0usize;

    for (index, list) in neighbors.iter().enumerate() {
        let source_file_id = ids[index];
        for target_file_id in list {
            if *target_file_id == source_file_id {
                self_references += 1;
                continue;
            }
            let Some(&target_index) = id_to_index.get(target_file_id) else {
                return Err(GraphFileError::malformed(format!(
                    "Knoten {} verweist auf unbekannten Nachbarn {}",
                    source_file_id, target_file_id
                )));
            };
            if !neighbors[target_index].contains(&source_file_id) {
                repaired += 1;
            }
            graph.link(node_ids[index], node_ids[target_index]);
        }
    }

    if self_references > 0 {
        log::warn!("{} Selbstreferenzen in Nachbarlisten ignoriert", self_references);
    }
    if repaired > 0 {
        log::warn!(
            "{} einseitige Nachbarschaften symmetrisch ergänzt",
            repaired
        );
    }

    log::info!(
        "Graph geladen: {} Knoten, {} Kanten",
        graph.node_count(),
        graph.edge_count()
    );

    Ok(graph)
}

/// Prüft Wurzelelement und Schema-Attribut.
fn check_root(
    reader: &Reader<&[u8]>,
    root: &BytesStart<'_>,
    tag: &str,
) -> Result<(), GraphFileError> {
    if tag != ROOT_TAG {
        return Err(GraphFileError::malformed(format!(
            "Unerwartetes Wurzelelement <{}>",
            tag
        )));
    }

    let mut schema: Option<String> = None;
    for attr in root.attributes().with_checks(false) {
        let attr = attr.map_err(GraphFileError::malformed)?;
        let key = reader
            .decoder()
            .decode(attr.key.as_ref())
            .map_err(GraphFileError::malformed)?;
        if key == "schema" {
            let value = attr
                .unescape_value()
                .map_err(GraphFileError::malformed)?
                .into_owned();
            schema = Some(value);
        }
    }

    if schema.as_deref().map(str::trim) != Some(SCHEMA_VERSION) {
        return Err(GraphFileError::UnsupportedSchema { found: schema });
    }
    Ok(())
}

fn parse_list<T: std::str::FromStr>(text: &str, list_name: &str) -> Result<Vec<T>, GraphFileError>
where
    <T as std::str::FromStr>::Err: std::fmt::Display,
{
    text.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<T>().map_err(|e| {
                GraphFileError::malformed(format!(
                    "Wert '{}' in <{}> konnte nicht geparst werden: {}",
                    truncate_for_error(s),
                    list_name,
                    e
                ))
            })
        })
        .collect()
}

fn parse_coordinates(text: &str, list_name: &str) -> Result<Vec<f32>, GraphFileError> {
    let values = parse_list::<f32>(text, list_name)?;
    if let Some(bad) = values.iter().find(|v| !v.is_finite()) {
        return Err(GraphFileError::malformed(format!(
            "Nicht-endliche Koordinate {} in <{}>",
            bad, list_name
        )));
    }
    Ok(values)
}

/// Verschachtelte Nachbarliste: `;` trennt Knoten, `,` trennt Nachbarn.
/// `-1` als einziger Eintrag markiert einen Knoten ohne Nachbarn; jeder
/// andere nicht-numerische oder negative Eintrag ist ein Fehler.
fn parse_nested_list(text: &str) -> Result<Vec<Vec<u64>>, GraphFileError> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }

    text.split(';')
        .map(|part| {
            let entries: Vec<&str> = part
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .collect();
            if entries == [NO_NEIGHBORS_MARKER] {
                return Ok(Vec::new());
            }
            entries
                .into_iter()
                .map(|s| {
                    s.parse::<u64>().map_err(|_| {
                        GraphFileError::malformed(format!(
                            "Nachbar-ID '{}' konnte nicht geparst werden",
                            truncate_for_error(s)
                        ))
                    })
                })
                .collect()
        })
        .collect()
}

/// Kürzt einen String für Fehlermeldungen auf max. 40 Zeichen.
fn truncate_for_error(s: &str) -> &str {
    match s.char_indices().nth(40) {
        Some((end, _)) => &s[..end],
        None => s,
    }
}
