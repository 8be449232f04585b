use log::debug;
use quick_xml::events::{BytesStart, Event};
use quick_xml::name::{Namespace, ResolveResult};
use quick_xml::NsReader;

use crate::error::ParseError;
use crate::model::*;

type Result<T> = std::result::Result<T, ParseError>;

/// Parse a GPX XML string into a GeoDocument.
///
/// Only a missing/foreign root or unparseable XML fails the parse. Points
/// with unusable coordinates and missing optional fields are dropped or
/// defaulted so that the rest of the file still loads.
pub fn parse_gpx(xml: &str) -> Result<GeoDocument> {
    let root = read_tree(xml).inspect_err(|_| debug!("input is not well-formed XML"))?;
    if !root.local_name.eq_ignore_ascii_case("gpx") {
        debug!("root element <{}> is not <gpx>", root.qualified_name);
        return Err(ParseError::NotGpx);
    }

    let lookup = Lookup {
        namespace: root.namespace.as_deref(),
    };

    let metadata = lookup.metadata(&root);
    let routes = lookup
        .children(&root, "rte")
        .into_iter()
        .map(|rte| Route {
            name: lookup.text(rte, "name"),
            points: lookup.points(rte, "rtept"),
        })
        .collect();
    let tracks = lookup
        .children(&root, "trk")
        .into_iter()
        .map(|trk| Track {
            name: lookup.text(trk, "name"),
            segments: lookup
                .children(trk, "trkseg")
                .into_iter()
                .map(|seg| Segment {
                    points: lookup.points(seg, "trkpt"),
                })
                .collect(),
        })
        .collect();
    let waypoints = lookup
        .children(&root, "wpt")
        .into_iter()
        .filter_map(|wpt| lookup.waypoint(wpt))
        .collect();

    let mut doc = GeoDocument {
        metadata,
        routes,
        tracks,
        waypoints,
        bounds: None,
    };
    doc.bounds = doc.metadata.bounds.or_else(|| doc.computed_bounds());

    debug!(
        "parsed GPX: {} routes, {} tracks, {} waypoints",
        doc.routes.len(),
        doc.tracks.len(),
        doc.waypoints.len()
    );
    Ok(doc)
}

/// Minimal element tree. GPX files are small enough that materialising
/// them keeps the namespace fallback simple at every nesting level.
#[derive(Debug)]
struct Element {
    namespace: Option<String>,
    local_name: String,
    qualified_name: String,
    attributes: Vec<(String, String)>,
    children: Vec<Node>,
}

#[derive(Debug)]
enum Node {
    Element(Element),
    Text(String),
}

impl Element {
    fn open(namespace: Option<String>, start: &BytesStart<'_>) -> Result<Self> {
        let mut attributes = Vec::new();
        for attr_result in start.attributes() {
            let attr = attr_result.map_err(|_| ParseError::NotGpx)?;
            attributes.push((utf8(attr.key.as_ref())?, utf8(&attr.value)?));
        }
        Ok(Self {
            namespace,
            local_name: utf8(start.local_name().as_ref())?,
            qualified_name: utf8(start.name().as_ref())?,
            attributes,
            children: Vec::new(),
        })
    }

    fn elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(el) => Some(el),
            Node::Text(_) => None,
        })
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Concatenated text of this element and all of its descendants.
    fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for node in &self.children {
            match node {
                Node::Text(t) => out.push_str(t),
                Node::Element(el) => el.collect_text(out),
            }
        }
    }

    /// `lat`/`lon` attributes, both required to be finite numbers.
    fn coordinates(&self) -> Option<GeoPoint> {
        let lat = self.attribute("lat").and_then(parse_number)?;
        let lng = self.attribute("lon").and_then(parse_number)?;
        Some(GeoPoint::new(lat, lng))
    }
}

/// Child lookup that tries the document's namespace first and then falls
/// back to the bare element name. Applied independently at every level
/// because some producers mix qualified and unqualified elements.
struct Lookup<'d> {
    namespace: Option<&'d str>,
}

impl Lookup<'_> {
    fn children<'e>(&self, parent: &'e Element, name: &str) -> Vec<&'e Element> {
        let qualified: Vec<&Element> = parent
            .elements()
            .filter(|el| el.namespace.as_deref() == self.namespace && el.local_name == name)
            .collect();
        if !qualified.is_empty() {
            return qualified;
        }
        parent
            .elements()
            .filter(|el| el.qualified_name == name)
            .collect()
    }

    fn child<'e>(&self, parent: &'e Element, name: &str) -> Option<&'e Element> {
        self.children(parent, name).into_iter().next()
    }

    /// Trimmed text of the first matching child, empty if there is none.
    fn text(&self, parent: &Element, name: &str) -> String {
        self.child(parent, name)
            .map(|el| el.text_content().trim().to_string())
            .unwrap_or_default()
    }

    fn number(&self, parent: &Element, name: &str) -> Option<f64> {
        parse_number(&self.text(parent, name))
    }

    fn points(&self, parent: &Element, name: &str) -> Vec<GeoPoint> {
        self.children(parent, name)
            .into_iter()
            .filter_map(Element::coordinates)
            .collect()
    }

    fn waypoint(&self, wpt: &Element) -> Option<Waypoint> {
        let GeoPoint { lat, lng } = wpt.coordinates()?;
        Some(Waypoint {
            lat,
            lng,
            name: self.text(wpt, "name"),
            desc: self.text(wpt, "desc"),
            elevation: self.number(wpt, "ele"),
        })
    }

    fn metadata(&self, gpx: &Element) -> Metadata {
        let Some(meta) = self.child(gpx, "metadata") else {
            return Metadata::default();
        };
        Metadata {
            name: self.text(meta, "name"),
            description: self.text(meta, "desc"),
            author: self.child(meta, "author").map(|a| self.text(a, "name")),
            time: self.text(meta, "time"),
            bounds: self
                .child(meta, "bounds")
                .and_then(|b| self.declared_bounds(b)),
        }
    }

    /// <bounds> values from child elements, falling back to attributes.
    /// Partially declared bounds are ignored.
    fn declared_bounds(&self, bounds: &Element) -> Option<Bounds> {
        let read = |name: &str| {
            self.number(bounds, name)
                .or_else(|| bounds.attribute(name).and_then(parse_number))
        };
        Some(Bounds {
            min_lat: read("minlat")?,
            min_lng: read("minlon")?,
            max_lat: read("maxlat")?,
            max_lng: read("maxlon")?,
        })
    }
}

/// Build the element tree, rejecting anything that is not a single
/// well-formed root element.
fn read_tree(xml: &str) -> Result<Element> {
    let mut reader = NsReader::from_str(xml);
    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        let (ns, event) = reader
            .read_resolved_event()
            .map_err(|_| ParseError::NotGpx)?;
        match event {
            Event::Start(e) => {
                let el = Element::open(namespace_uri(ns)?, &e)?;
                stack.push(el);
            }
            Event::Empty(e) => {
                let el = Element::open(namespace_uri(ns)?, &e)?;
                close(&mut stack, &mut root, el)?;
            }
            Event::End(_) => {
                let el = stack.pop().ok_or(ParseError::NotGpx)?;
                close(&mut stack, &mut root, el)?;
            }
            Event::Text(e) => push_text(&mut stack, utf8(e.as_ref())?)?,
            Event::CData(e) => push_text(&mut stack, utf8(e.as_ref())?)?,
            Event::GeneralRef(e) => {
                let resolved = match e.resolve_char_ref() {
                    Ok(Some(ch)) => ch.to_string(),
                    Ok(None) => match e.as_ref() {
                        b"amp" => "&".to_string(),
                        b"lt" => "<".to_string(),
                        b"gt" => ">".to_string(),
                        b"quot" => "\"".to_string(),
                        b"apos" => "'".to_string(),
                        _ => return Err(ParseError::NotGpx),
                    },
                    Err(_) => return Err(ParseError::NotGpx),
                };
                push_text(&mut stack, resolved)?;
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !stack.is_empty() {
        return Err(ParseError::NotGpx);
    }
    root.ok_or(ParseError::NotGpx)
}

fn namespace_uri(ns: ResolveResult<'_>) -> Result<Option<String>> {
    match ns {
        ResolveResult::Bound(Namespace(uri)) => Ok(Some(utf8(uri)?)),
        ResolveResult::Unbound => Ok(None),
        // Undeclared prefix
        ResolveResult::Unknown(_) => Err(ParseError::NotGpx),
    }
}

fn close(stack: &mut Vec<Element>, root: &mut Option<Element>, el: Element) -> Result<()> {
    match stack.last_mut() {
        Some(parent) => parent.children.push(Node::Element(el)),
        None if root.is_none() => *root = Some(el),
        // A second top-level element
        None => return Err(ParseError::NotGpx),
    }
    Ok(())
}

fn push_text(stack: &mut [Element], text: String) -> Result<()> {
    match stack.last_mut() {
        Some(parent) => parent.children.push(Node::Text(text)),
        None if text.trim().is_empty() => {}
        None => return Err(ParseError::NotGpx),
    }
    Ok(())
}

fn utf8(bytes: &[u8]) -> Result<String> {
    std::str::from_utf8(bytes)
        .map(str::to_string)
        .map_err(|_| ParseError::NotGpx)
}

/// Finite `f64` from trimmed text.
fn parse_number(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(lat: f64, lng: f64) -> GeoPoint {
        GeoPoint::new(lat, lng)
    }

    #[test]
    fn test_minimal_waypoint() {
        let xml = r#"<?xml version="1.0"?>
<gpx version="1.1">
  <wpt lat="35.6762" lon="139.6503"/>
</gpx>"#;
        let doc = parse_gpx(xml).unwrap();
        assert_eq!(doc.waypoints.len(), 1);
        assert!((doc.waypoints[0].lat - 35.6762).abs() < 1e-10);
        assert!((doc.waypoints[0].lng - 139.6503).abs() < 1e-10);
        assert_eq!(doc.waypoints[0].name, "");
        assert_eq!(doc.waypoints[0].elevation, None);
    }

    #[test]
    fn test_waypoint_with_children() {
        let xml = r#"<?xml version="1.0"?>
<gpx version="1.1">
  <wpt lat="35.6762" lon="139.6503">
    <ele>40.5</ele>
    <name>  Tokyo Tower </name>
    <desc>A famous landmark</desc>
  </wpt>
</gpx>"#;
        let doc = parse_gpx(xml).unwrap();
        let wpt = &doc.waypoints[0];
        assert_eq!(wpt.elevation, Some(40.5));
        assert_eq!(wpt.name, "Tokyo Tower");
        assert_eq!(wpt.desc, "A famous landmark");
    }

    #[test]
    fn test_non_numeric_elevation_is_absent() {
        let xml = r#"<gpx><wpt lat="1" lon="2"><ele>high</ele></wpt></gpx>"#;
        let doc = parse_gpx(xml).unwrap();
        assert_eq!(doc.waypoints[0].elevation, None);
    }

    #[test]
    fn test_simple_route() {
        let xml = r#"<?xml version="1.0"?>
<gpx version="1.1">
  <rte>
    <name>R1</name>
    <rtept lat="37.0" lon="127.0"/>
    <rtept lat="37.1" lon="127.1"/>
  </rte>
</gpx>"#;
        let doc = parse_gpx(xml).unwrap();
        assert_eq!(
            doc.routes,
            vec![Route {
                name: "R1".to_string(),
                points: vec![pt(37.0, 127.0), pt(37.1, 127.1)],
            }]
        );
    }

    #[test]
    fn test_route_points_with_children() {
        let xml = r#"<gpx>
  <rte>
    <rtept lat="35.0" lon="139.0"><name>A</name><ele>3</ele></rtept>
    <rtept lat="36.0" lon="140.0"></rtept>
  </rte>
</gpx>"#;
        let doc = parse_gpx(xml).unwrap();
        assert_eq!(doc.routes[0].name, "");
        assert_eq!(doc.routes[0].points, vec![pt(35.0, 139.0), pt(36.0, 140.0)]);
    }

    #[test]
    fn test_multi_segment_track() {
        let xml = r#"<?xml version="1.0"?>
<gpx version="1.1">
  <trk>
    <name>Morning Run</name>
    <trkseg>
      <trkpt lat="35.0" lon="139.0"/>
      <trkpt lat="35.001" lon="139.001"/>
    </trkseg>
    <trkseg>
      <trkpt lat="36.0" lon="140.0"/>
    </trkseg>
  </trk>
</gpx>"#;
        let doc = parse_gpx(xml).unwrap();
        assert_eq!(doc.tracks.len(), 1);
        assert_eq!(doc.tracks[0].name, "Morning Run");
        assert_eq!(doc.tracks[0].segments.len(), 2);
        assert_eq!(doc.tracks[0].segments[0].points.len(), 2);
        assert_eq!(doc.tracks[0].segments[1].points, vec![pt(36.0, 140.0)]);
    }

    #[test]
    fn test_empty_segment_kept() {
        let xml = r#"<gpx>
  <trk>
    <trkseg></trkseg>
    <trkseg><trkpt lat="35.0" lon="139.0"/></trkseg>
  </trk>
</gpx>"#;
        let doc = parse_gpx(xml).unwrap();
        assert_eq!(doc.tracks[0].segments.len(), 2);
        assert!(doc.tracks[0].segments[0].points.is_empty());
    }

    #[test]
    fn test_invalid_trkpt_dropped_siblings_kept() {
        let xml = r#"<gpx>
  <trk><trkseg>
    <trkpt lat="1.0" lon="1.0"/>
    <trkpt lat="abc" lon="2.0"/>
    <trkpt lat="3.0" lon="3.0"/>
    <trkpt lon="4.0"/>
    <trkpt lat="5.0" lon="5.0"/>
  </trkseg></trk>
</gpx>"#;
        let doc = parse_gpx(xml).unwrap();
        assert_eq!(
            doc.tracks[0].segments[0].points,
            vec![pt(1.0, 1.0), pt(3.0, 3.0), pt(5.0, 5.0)]
        );
    }

    #[test]
    fn test_non_finite_coordinates_dropped() {
        let xml = r#"<gpx>
  <rte>
    <rtept lat="inf" lon="1"/>
    <rtept lat="NaN" lon="1"/>
    <rtept lat="2" lon="2"/>
  </rte>
</gpx>"#;
        let doc = parse_gpx(xml).unwrap();
        assert_eq!(doc.routes[0].points, vec![pt(2.0, 2.0)]);
    }

    #[test]
    fn test_waypoint_missing_lat_dropped() {
        let xml = r#"<?xml version="1.0"?>
<gpx version="1.1">
  <wpt lat="35.0" lon="139.0"><name>Good</name></wpt>
  <wpt lon="139.5"><name>Bad - no lat</name></wpt>
  <wpt lat="36.0" lon="140.0"><name>Also Good</name></wpt>
</gpx>"#;
        let doc = parse_gpx(xml).unwrap();
        assert_eq!(doc.waypoints.len(), 2);
        assert_eq!(doc.waypoints[0].name, "Good");
        assert_eq!(doc.waypoints[1].name, "Also Good");
    }

    #[test]
    fn test_empty_gpx() {
        let doc = parse_gpx(r#"<?xml version="1.0"?><gpx version="1.1"></gpx>"#).unwrap();
        assert!(doc.waypoints.is_empty());
        assert!(doc.routes.is_empty());
        assert!(doc.tracks.is_empty());
        assert_eq!(doc.bounds, None);
        assert_eq!(doc.metadata, Metadata::default());
    }

    #[test]
    fn test_wrong_root() {
        let xml = r#"<?xml version="1.0"?><kml><Placemark/></kml>"#;
        assert_eq!(parse_gpx(xml), Err(ParseError::NotGpx));
    }

    #[test]
    fn test_malformed_xml() {
        assert_eq!(parse_gpx(""), Err(ParseError::NotGpx));
        assert_eq!(parse_gpx("not xml at all"), Err(ParseError::NotGpx));
        assert_eq!(parse_gpx("<gpx><rte></gpx>"), Err(ParseError::NotGpx));
        assert_eq!(parse_gpx("<gpx><rte>"), Err(ParseError::NotGpx));
        assert_eq!(parse_gpx("<gpx/><gpx/>"), Err(ParseError::NotGpx));
        assert_eq!(parse_gpx("<x:gpx><wpt/></x:gpx>"), Err(ParseError::NotGpx));
    }

    #[test]
    fn test_root_name_case_insensitive() {
        let doc = parse_gpx(r#"<GPX><wpt lat="1" lon="2"/></GPX>"#).unwrap();
        assert_eq!(doc.waypoints.len(), 1);
    }

    #[test]
    fn test_prefixed_root() {
        let xml = r#"<g:gpx xmlns:g="http://www.topografix.com/GPX/1/1">
  <g:wpt lat="1" lon="2"><g:name>Prefixed</g:name></g:wpt>
</g:gpx>"#;
        let doc = parse_gpx(xml).unwrap();
        assert_eq!(doc.waypoints.len(), 1);
        assert_eq!(doc.waypoints[0].name, "Prefixed");
    }

    #[test]
    fn test_with_namespace() {
        let xml = r#"<?xml version="1.0"?>
<gpx xmlns="http://www.topografix.com/GPX/1/1" version="1.1">
  <wpt lat="35.0" lon="139.0"><name>Test</name></wpt>
</gpx>"#;
        let doc = parse_gpx(xml).unwrap();
        assert_eq!(doc.waypoints.len(), 1);
        assert_eq!(doc.waypoints[0].name, "Test");
    }

    #[test]
    fn test_mixed_namespace_levels() {
        // <rte> and its children opt out of the default namespace.
        let xml = r#"<gpx xmlns="http://www.topografix.com/GPX/1/1">
  <rte xmlns="">
    <name>Plain</name>
    <rtept lat="1" lon="1"/>
  </rte>
  <trk>
    <name>Qualified</name>
    <trkseg><trkpt xmlns="" lat="2" lon="2"/></trkseg>
  </trk>
</gpx>"#;
        let doc = parse_gpx(xml).unwrap();
        assert_eq!(doc.routes.len(), 1);
        assert_eq!(doc.routes[0].name, "Plain");
        assert_eq!(doc.routes[0].points, vec![pt(1.0, 1.0)]);
        assert_eq!(doc.tracks[0].name, "Qualified");
        assert_eq!(doc.tracks[0].segments[0].points, vec![pt(2.0, 2.0)]);
    }

    #[test]
    fn test_namespaced_matches_take_precedence() {
        let xml = r#"<gpx xmlns="http://www.topografix.com/GPX/1/1">
  <wpt lat="1" lon="1"><name>qualified</name></wpt>
  <wpt xmlns="" lat="2" lon="2"><name>plain</name></wpt>
</gpx>"#;
        let doc = parse_gpx(xml).unwrap();
        assert_eq!(doc.waypoints.len(), 1);
        assert_eq!(doc.waypoints[0].name, "qualified");
    }

    #[test]
    fn test_metadata() {
        let xml = r#"<gpx>
  <metadata>
    <name> Trip </name>
    <desc>Weekend</desc>
    <author><name>Kim</name></author>
    <time>2025-01-01T00:00:00Z</time>
  </metadata>
</gpx>"#;
        let doc = parse_gpx(xml).unwrap();
        assert_eq!(doc.metadata.name, "Trip");
        assert_eq!(doc.metadata.description, "Weekend");
        assert_eq!(doc.metadata.author.as_deref(), Some("Kim"));
        assert_eq!(doc.metadata.time, "2025-01-01T00:00:00Z");
        assert_eq!(doc.metadata.bounds, None);
    }

    #[test]
    fn test_author_absent_vs_empty() {
        let doc = parse_gpx("<gpx><metadata><name>x</name></metadata></gpx>").unwrap();
        assert_eq!(doc.metadata.author, None);

        let doc = parse_gpx("<gpx><metadata><author/></metadata></gpx>").unwrap();
        assert_eq!(doc.metadata.author.as_deref(), Some(""));
    }

    #[test]
    fn test_declared_bounds_attributes_preferred_over_points() {
        let xml = r#"<gpx>
  <metadata><bounds minlat="10" minlon="20" maxlat="11" maxlon="21"/></metadata>
  <wpt lat="50" lon="60"/>
</gpx>"#;
        let doc = parse_gpx(xml).unwrap();
        let expected = Bounds {
            min_lat: 10.0,
            min_lng: 20.0,
            max_lat: 11.0,
            max_lng: 21.0,
        };
        assert_eq!(doc.metadata.bounds, Some(expected));
        assert_eq!(doc.bounds, Some(expected));
    }

    #[test]
    fn test_declared_bounds_child_elements_win_over_attributes() {
        let xml = r#"<gpx>
  <metadata>
    <bounds minlat="0" minlon="0" maxlat="0" maxlon="0">
      <minlat>1</minlat><minlon>2</minlon><maxlat>3</maxlat>
    </bounds>
  </metadata>
</gpx>"#;
        let doc = parse_gpx(xml).unwrap();
        // maxlon has no child element and falls back to its attribute.
        assert_eq!(
            doc.bounds,
            Some(Bounds {
                min_lat: 1.0,
                min_lng: 2.0,
                max_lat: 3.0,
                max_lng: 0.0,
            })
        );
    }

    #[test]
    fn test_partial_declared_bounds_ignored() {
        let xml = r#"<gpx>
  <metadata><bounds minlat="10" minlon="20"/></metadata>
  <wpt lat="1" lon="2"/>
</gpx>"#;
        let doc = parse_gpx(xml).unwrap();
        assert_eq!(doc.metadata.bounds, None);
        assert_eq!(doc.bounds, Some(Bounds::from_point(pt(1.0, 2.0))));
    }

    #[test]
    fn test_computed_bounds_cover_all_kinds() {
        let xml = r#"<gpx>
  <wpt lat="5" lon="5"/>
  <rte><rtept lat="-1" lon="3"/></rte>
  <trk><trkseg><trkpt lat="2" lon="-7"/></trkseg><trkseg><trkpt lat="9" lon="1"/></trkseg></trk>
</gpx>"#;
        let doc = parse_gpx(xml).unwrap();
        assert_eq!(
            doc.bounds,
            Some(Bounds {
                min_lat: -1.0,
                min_lng: -7.0,
                max_lat: 9.0,
                max_lng: 5.0,
            })
        );
    }

    #[test]
    fn test_extensions_ignored() {
        let xml = r#"<?xml version="1.0"?>
<gpx version="1.1">
  <trk>
    <trkseg>
      <trkpt lat="35.0" lon="139.0">
        <extensions>
          <gpxtpx:TrackPointExtension xmlns:gpxtpx="http://www.garmin.com/xmlschemas/TrackPointExtension/v1">
            <gpxtpx:hr>150</gpxtpx:hr>
          </gpxtpx:TrackPointExtension>
        </extensions>
      </trkpt>
    </trkseg>
  </trk>
</gpx>"#;
        let doc = parse_gpx(xml).unwrap();
        assert_eq!(doc.tracks[0].segments[0].points.len(), 1);
    }

    #[test]
    fn test_track_name_not_taken_from_points() {
        let xml = r#"<gpx><trk><trkseg><trkpt lat="1" lon="1"><name>pt</name></trkpt></trkseg></trk></gpx>"#;
        let doc = parse_gpx(xml).unwrap();
        assert_eq!(doc.tracks[0].name, "");
    }

    #[test]
    fn test_cdata() {
        let xml = r#"<gpx>
  <wpt lat="35.0" lon="139.0">
    <name><![CDATA[Test & Name]]></name>
  </wpt>
</gpx>"#;
        let doc = parse_gpx(xml).unwrap();
        assert_eq!(doc.waypoints[0].name, "Test & Name");
    }

    #[test]
    fn test_xml_entities() {
        let xml = r#"<gpx>
  <wpt lat="35.0" lon="139.0">
    <name>Caf&#233; &amp; Bar &lt;1&gt;</name>
  </wpt>
</gpx>"#;
        let doc = parse_gpx(xml).unwrap();
        assert_eq!(doc.waypoints[0].name, "Café & Bar <1>");
    }

    #[test]
    fn test_gpx10_elements_ignored() {
        let xml = r#"<?xml version="1.0"?>
<gpx xmlns="http://www.topografix.com/GPX/1/0" version="1.0">
  <trk>
    <trkseg>
      <trkpt lat="35.0" lon="139.0">
        <speed>5.5</speed>
        <course>180.0</course>
      </trkpt>
      <trkpt lat="35.001" lon="139.001"/>
    </trkseg>
  </trk>
</gpx>"#;
        let doc = parse_gpx(xml).unwrap();
        assert_eq!(doc.tracks[0].segments[0].points.len(), 2);
    }
}
