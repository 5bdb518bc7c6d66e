// SPDX-FileCopyrightText: [2023] Serokell <hi@serokell.io>
// SPDX-FileCopyrightText: [2022-2023] TriliTech <contact@trili.tech>
//
// SPDX-License-Identifier: MIT

//! Tests that cover several components: addresses packed inside Micheline.

#[cfg(test)]
mod test_pack_with_address {
    use crate::address::encode_address;
    use crate::ast::{Micheline, Prim};

    const TARGET: &str = "KT1Ni4pYV3UGWcDp7MgR5prgcD4NCK1MpXiR";

    fn transfer_payload() -> Micheline {
        let target = hex::encode(encode_address(TARGET).unwrap());
        Micheline::prim2(
            Prim::Pair,
            Micheline::prim2(Prim::Pair, "testId".into(), Micheline::Bytes(target)),
            Micheline::Int("17170000".to_owned()),
        )
    }

    #[test]
    fn test_pair_with_address() {
        let expected = concat!(
            "05",                                           // version
            "0707",                                         // Pair, 2 args
            "0707",                                         // Pair, 2 args
            "0100000006746573744964",                       // "testId"
            "0a00000016",                                   // bytes, 22 long
            "019af3138763ec09dde90926f5a6b60783a21607d500", // KT1 address
            "0090f9af10",                                   // 17170000
        );
        assert_eq!(
            hex::encode(transfer_payload().encode_for_pack().unwrap()),
            expected
        );
    }

    #[test]
    fn test_deterministic() {
        let m = transfer_payload();
        assert_eq!(m.encode_for_pack(), m.encode_for_pack());
        assert_eq!(transfer_payload().encode_for_pack(), m.encode_for_pack());
    }

    #[test]
    fn test_from_json() {
        let m = Micheline::from_json(
            r#"{ "prim": "Pair",
                 "args": [ { "prim": "Pair",
                             "args": [ { "string": "testId" },
                                       { "bytes": "019af3138763ec09dde90926f5a6b60783a21607d500" } ] },
                           { "int": "17170000" } ] }"#,
        )
        .unwrap();
        assert_eq!(m.encode_for_pack(), transfer_payload().encode_for_pack());
    }

    // Expected bytes as produced by
    // octez-client --mode mockup run michelson code PACK on stack "{Stack_elt $ty $val}"
    #[test]
    fn test_packed_address_value() {
        let address = hex::encode(encode_address("tz1NyAf1KeeFCCPPAZ9ard9YVshVGFibzVKa").unwrap());
        assert_eq!(
            hex::encode(Micheline::Bytes(address).encode_for_pack().unwrap()),
            "050a0000001600002486eda3c7bbbe6be511b46d6deeb1594258a7fd"
        );
    }

    #[test]
    fn test_comb_pair() {
        let m = Micheline::prim2(
            Prim::Pair,
            Micheline::int(1),
            Micheline::prim2(Prim::Pair, Micheline::int(2), Micheline::int(3)),
        );
        assert_eq!(
            hex::encode(m.encode_for_pack().unwrap()),
            "0507070001070700020003"
        );
    }
}
