use pcjson_core::{
    decode_flags, encode_flags, Diagnostics, FlagTable, HandleCategory, HandleNameTable,
    JsonValue,
};
use proptest::prelude::*;
use serde_json::json;

const ACCESS: FlagTable = FlagTable {
    type_name: "VkColorComponentFlags",
    width: 32,
    bits: &[(0x1, "R"), (0x2, "G"), (0x4, "B"), (0x8, "A")],
    aliases: &[(0x7, "RGB"), (0x3, "RG")],
};

proptest! {
    #[test]
    fn flags_survive_round_trip(value in 0u64..16) {
        let mut diag = Diagnostics::new();
        let json = encode_flags(value, &ACCESS, &mut diag);
        prop_assert_eq!(decode_flags(&json, &ACCESS, &mut diag), value);
        prop_assert!(diag.is_ok());
    }

    #[test]
    fn handle_indices_survive_names(count in 1usize..32, pick in any::<prop::sample::Index>()) {
        let names: Vec<String> = (0..count).map(|i| format!("object{i}")).collect();
        let generated = HandleNameTable::with_names(HandleCategory::Sampler, names.clone());
        let mut parsed = HandleNameTable::with_capacity(HandleCategory::Sampler, count);
        let mut diag = Diagnostics::new();
        for name in &names {
            parsed.define(name, &mut diag);
        }
        let index = pick.index(count) as u64;
        let name = generated.name_for(index, &mut diag).map(str::to_string);
        prop_assert!(name.is_some());
        let back = parsed.index_for(&name.unwrap_or_default(), &mut diag);
        prop_assert_eq!(back, Some(index as u32));
        prop_assert!(diag.is_ok());
    }

    #[test]
    fn integers_survive_round_trip(a in any::<u64>(), b in any::<i32>(), c in any::<u16>()) {
        let mut diag = Diagnostics::new();
        prop_assert_eq!(u64::from_json(&a.to_json(&mut diag), &mut diag), a);
        prop_assert_eq!(i32::from_json(&b.to_json(&mut diag), &mut diag), b);
        prop_assert_eq!(u16::from_json(&c.to_json(&mut diag), &mut diag), c);
        prop_assert!(diag.is_ok());
    }

    #[test]
    fn finite_floats_survive_round_trip(v in any::<f32>().prop_filter("finite", |v| v.is_finite())) {
        let mut diag = Diagnostics::new();
        let back = f32::from_json(&v.to_json(&mut diag), &mut diag);
        prop_assert_eq!(back.to_bits(), v.to_bits());
    }
}

#[test]
fn aliases_need_an_exact_match() {
    let mut diag = Diagnostics::new();
    assert_eq!(encode_flags(0x7, &ACCESS, &mut diag), json!("RGB"));
    assert_eq!(encode_flags(0x3, &ACCESS, &mut diag), json!("RG"));
    assert_eq!(encode_flags(0xf, &ACCESS, &mut diag), json!("R | G | B | A"));
    assert_eq!(encode_flags(0xb, &ACCESS, &mut diag), json!("R | G | A"));
    assert!(diag.is_ok());
}
