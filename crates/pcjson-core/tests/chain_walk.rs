use pcjson_core::{
    decode_structure, encode_structure, read_field, write_field, Chain, ChainPolicy, ChainRecord,
    Chained, Diagnostics, Discriminant, EnumTable, Extensible, Fields, OnUnknownLink, Severity,
    Structure,
};
use proptest::prelude::*;
use serde_json::{json, Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Kind(i32);

const KINDS: EnumTable = EnumTable {
    type_name: "Kind",
    values: &[(1, "ROOT"), (2, "ALPHA"), (3, "BETA"), (4, "GAMMA")],
};

impl Discriminant for Kind {
    const TABLE: &'static EnumTable = &KINDS;

    fn raw(self) -> i64 {
        i64::from(self.0)
    }

    fn from_raw(raw: i64) -> Self {
        Kind(raw as i32)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
struct Root {
    width: u32,
}

impl Fields for Root {
    fn encode_fields(&self, out: &mut Map<String, Value>, diag: &mut Diagnostics) {
        write_field(out, "width", &self.width, diag);
    }

    fn decode_fields(obj: &Map<String, Value>, diag: &mut Diagnostics) -> Self {
        Self {
            width: read_field(obj, "width", diag),
        }
    }
}

impl Structure for Root {
    type Tag = Kind;
    const TYPE_NAME: &'static str = "Root";
    const TAG: Kind = Kind(1);
}

impl Extensible for Root {
    type Link = Link;

    fn allowed() -> &'static [Kind] {
        &[Kind(2), Kind(3)]
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Link {
    Alpha(u32),
    Beta(bool),
    Gamma,
    Opaque(Kind),
}

impl ChainRecord for Link {
    type Tag = Kind;

    fn tag(&self) -> Kind {
        match self {
            Link::Alpha(_) => Kind(2),
            Link::Beta(_) => Kind(3),
            Link::Gamma => Kind(4),
            Link::Opaque(kind) => *kind,
        }
    }

    fn type_name(tag: Kind) -> Option<&'static str> {
        match tag.0 {
            2 => Some("Alpha"),
            3 => Some("Beta"),
            4 => Some("Gamma"),
            _ => None,
        }
    }

    fn encode_payload(&self, out: &mut Map<String, Value>, diag: &mut Diagnostics) -> bool {
        match self {
            Link::Alpha(v) => write_field(out, "value", v, diag),
            Link::Beta(on) => write_field(out, "enabled", on, diag),
            Link::Gamma => {}
            Link::Opaque(_) => return false,
        }
        true
    }

    fn decode_payload(tag: Kind, obj: &Map<String, Value>, diag: &mut Diagnostics) -> Option<Self> {
        match tag.0 {
            2 => Some(Link::Alpha(read_field(obj, "value", diag))),
            3 => Some(Link::Beta(read_field(obj, "enabled", diag))),
            4 => Some(Link::Gamma),
            _ => None,
        }
    }
}

fn root(links: Vec<Link>) -> Chained<Root, Link> {
    Chained {
        value: Root { width: 7 },
        next: links.into_iter().collect(),
    }
}

#[test]
fn empty_chain_is_null() {
    let mut diag = Diagnostics::new();
    let json = encode_structure(&Root { width: 3 }, &Chain::new(), &mut diag);
    assert_eq!(json, json!({"sType": "ROOT", "width": 3, "pNext": "NULL"}));
    assert!(diag.take_messages().is_none());
}

#[test]
fn links_nest_in_order() {
    let record = root(vec![Link::Alpha(9), Link::Beta(true)]);
    let mut diag = Diagnostics::new();
    let json = encode_structure(&record.value, &record.next, &mut diag);
    assert_eq!(
        json,
        json!({
            "sType": "ROOT",
            "width": 7,
            "pNext": {
                "sType": "ALPHA",
                "value": 9,
                "pNext": {"sType": "BETA", "enabled": "VK_TRUE", "pNext": "NULL"}
            }
        })
    );
    let back: Chained<Root, Link> = decode_structure(&json, &mut diag);
    assert!(diag.is_ok());
    assert_eq!(back, record);
}

#[test]
fn encode_skips_links_the_root_does_not_accept() {
    let record = root(vec![Link::Alpha(1), Link::Gamma, Link::Opaque(Kind(77)), Link::Beta(false)]);
    let mut diag = Diagnostics::new();
    let json = encode_structure(&record.value, &record.next, &mut diag);
    assert!(diag.is_ok(), "skipped links are warnings");
    assert_eq!(diag.messages().len(), 2);
    assert!(diag.messages().iter().all(|m| m.severity == Severity::Warning));
    assert_eq!(diag.messages()[0].path, "pNext<Gamma>");
    assert!(diag.messages()[0].text.contains("Invalid structure type GAMMA extending Root"));
    assert!(diag.messages()[1].text.contains("77"));
    assert_eq!(json["pNext"]["sType"], json!("ALPHA"));
    assert_eq!(json["pNext"]["pNext"]["sType"], json!("BETA"));
    assert_eq!(json["pNext"]["pNext"]["pNext"], json!("NULL"));
}

#[test]
fn decode_stops_at_unknown_link_and_keeps_prefix() {
    let json = json!({
        "sType": "ROOT",
        "width": 7,
        "pNext": {
            "sType": "ALPHA",
            "value": 5,
            "pNext": {
                "sType": "GAMMA",
                "pNext": {"sType": "BETA", "enabled": "VK_TRUE", "pNext": "NULL"}
            }
        }
    });
    let mut diag = Diagnostics::new();
    let back: Chained<Root, Link> = decode_structure(&json, &mut diag);
    assert!(!diag.is_ok());
    assert_eq!(diag.error_count(), 1);
    assert_eq!(back.next.iter().cloned().collect::<Vec<_>>(), vec![Link::Alpha(5)]);
}

#[test]
fn decode_policy_can_skip_instead_of_stopping() {
    let json = json!({
        "sType": "ROOT",
        "width": 7,
        "pNext": {
            "sType": 99,
            "pNext": {"sType": "BETA", "enabled": "VK_FALSE", "pNext": "NULL"}
        }
    });
    let mut diag = Diagnostics::with_chain_policy(ChainPolicy {
        encode: OnUnknownLink::Warn,
        decode: OnUnknownLink::Error,
    });
    let back: Chained<Root, Link> = decode_structure(&json, &mut diag);
    assert!(!diag.is_ok());
    assert_eq!(back.next.iter().cloned().collect::<Vec<_>>(), vec![Link::Beta(false)]);
}

#[test]
fn encode_policy_can_stop() {
    let record = root(vec![Link::Gamma, Link::Alpha(3)]);
    let mut diag = Diagnostics::with_chain_policy(ChainPolicy {
        encode: OnUnknownLink::Stop,
        decode: OnUnknownLink::Stop,
    });
    let json = encode_structure(&record.value, &record.next, &mut diag);
    assert!(!diag.is_ok());
    assert_eq!(json["pNext"], json!("NULL"));
}

#[test]
fn root_stype_is_revalidated() {
    let json = json!({"sType": "ALPHA", "width": 2, "pNext": "NULL"});
    let mut diag = Diagnostics::new();
    let back: Chained<Root, Link> = decode_structure(&json, &mut diag);
    assert_eq!(back.value.width, 2);
    let err = diag.take_messages().expect("messages");
    assert!(err.contains("expected ROOT, found ALPHA"), "unexpected error: {err}");
}

#[test]
fn malformed_next_is_an_error() {
    let json = json!({"sType": "ROOT", "width": 2, "pNext": 12});
    let mut diag = Diagnostics::new();
    let _: Chained<Root, Link> = decode_structure(&json, &mut diag);
    let err = diag.take_messages().expect("messages");
    assert!(err.contains("Invalid pNext format"), "unexpected error: {err}");
}

fn arb_link() -> impl Strategy<Value = Link> {
    prop_oneof![any::<u32>().prop_map(Link::Alpha), any::<bool>().prop_map(Link::Beta)]
}

proptest! {
    #[test]
    fn chain_order_survives_round_trip(links in prop::collection::vec(arb_link(), 0..8)) {
        let record = root(links.clone());
        let mut diag = Diagnostics::new();
        let json = encode_structure(&record.value, &record.next, &mut diag);
        let back: Chained<Root, Link> = decode_structure(&json, &mut diag);
        prop_assert!(diag.is_ok());
        prop_assert_eq!(back.next.len(), links.len());
        prop_assert_eq!(back.next.iter().cloned().collect::<Vec<_>>(), links);
    }
}
