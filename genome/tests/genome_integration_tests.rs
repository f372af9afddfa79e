//
// Copyright 2025-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

//! Integration tests for the genome layout and accessors
//!
//! Property tests cover every field: round trips, isolation from neighbouring fields and
//! truncation of oversized values.

use heritage_genome::{
    EyeColor, GeneField, Gender, Genome, HairColor, RESERVED_BITS, register::BitRegister,
};
use proptest::prelude::*;

fn any_field() -> impl Strategy<Value = GeneField> {
    prop::sample::select(GeneField::all().to_vec())
}

fn field_and_value() -> impl Strategy<Value = (GeneField, u64)> {
    any_field().prop_flat_map(|field| (Just(field), 0..=field.max_value()))
}

proptest! {
    #[test]
    fn prop_set_then_get(word in any::<u64>(), (field, value) in field_and_value()) {
        let genome = Genome::new(word).set(field, value);
        prop_assert_eq!(genome.get(field), value);
    }

    #[test]
    fn prop_set_leaves_other_fields(word in any::<u64>(), (field, value) in field_and_value()) {
        let before = Genome::new(word);
        let after = before.set(field, value);
        for other in GeneField::all().iter().filter(|other| **other != field) {
            prop_assert_eq!(after.get(*other), before.get(*other), "{} changed", other);
        }
        prop_assert_eq!(after.bits() & RESERVED_BITS, before.bits() & RESERVED_BITS);
    }

    #[test]
    fn prop_set_truncates(word in any::<u64>(), field in any_field(), value in any::<u64>()) {
        let genome = Genome::new(word).set(field, value);
        prop_assert_eq!(genome.get(field), value & field.max_value());
    }

    #[test]
    fn prop_get_in_range(word in any::<u64>(), field in any_field()) {
        prop_assert!(Genome::new(word).get(field) <= field.max_value());
    }

    #[test]
    fn prop_get_matches_register(word in any::<u64>(), field in any_field()) {
        prop_assert_eq!(
            Genome::new(word).get(field),
            word.read_bits(field.offset(), field.width())
        );
    }

    #[test]
    fn prop_gender_round_trip(word in any::<u64>(), raw in 0u64..4) {
        let genome = Genome::new(word).set(GeneField::Gender, raw);
        let gender = genome.gender();
        prop_assert_eq!(genome.set_gender(gender), genome);
    }

    #[test]
    fn prop_parse_display_round_trip(word in any::<u64>()) {
        let genome = Genome::new(word);
        prop_assert_eq!(genome.to_string().parse::<Genome>().unwrap(), genome);
    }
}

#[test]
fn test_pack_female_brown_height() {
    let genome = Genome::default()
        .set_gender(Gender::Female)
        .set_eye_color(EyeColor::Brown)
        .set_height(5);

    assert_eq!(genome.gender(), Gender::Female);
    assert_eq!(genome.eye_color(), EyeColor::Brown);
    assert_eq!(genome.height(), 5);

    // Nothing else was touched.
    let touched = GeneField::Gender.mask() | GeneField::EyeColor.mask() | GeneField::Height.mask();
    assert_eq!(genome.bits() & !touched, 0);
}

#[test]
fn test_every_field_accessor() {
    let genome = Genome::default()
        .set_gender(Gender::Male)
        .set_eye_color(EyeColor::Blue)
        .set_hair_color(HairColor::Red, false)
        .set_complexion(15)
        .set_height(1)
        .set_mass(2)
        .set_growth(3)
        .set_strength(4)
        .set_intelligence(5)
        .set_dexterity(6)
        .set_resilience(7)
        .set_openness(8)
        .set_conscientiousness(9)
        .set_extraversion(10)
        .set_agreeableness(11)
        .set_neuroticism(12);

    assert_eq!(genome.get(GeneField::Gender), 0b01);
    assert_eq!(genome.get(GeneField::EyeColor), 1);
    assert_eq!(genome.get(GeneField::HairColor), 1);
    let expected = [15, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12];
    for (field, value) in GeneField::all()[3..].iter().zip(expected) {
        assert_eq!(genome.get(*field), value, "{field}");
    }
    assert_eq!(genome.bits(), 0x53E5_3456_789A_BC00);
}

#[test]
fn test_unknown_gender_preserved() {
    let genome = Genome::default().set(GeneField::Gender, 0b10);
    assert_eq!(genome.gender(), Gender::Unknown(0b10));
    assert_eq!(
        Genome::default().set_gender(genome.gender()).get(GeneField::Gender),
        0b10
    );
}

#[test]
fn test_curly_hair_composition() {
    for color in HairColor::all() {
        let genome = Genome::new(u64::MAX).set_hair_color(*color, true);
        assert_eq!(genome.hair_raw(), 0, "{color}");
        assert_eq!(genome.hair_color(), (HairColor::Blonde, false));
        assert_eq!(genome.complexion(), 15);
    }
}

#[test]
fn test_summary_json() {
    let genome = Genome::default()
        .set_gender(Gender::Female)
        .set_eye_color(EyeColor::Brown)
        .set_height(5);
    let json = serde_json::to_value(genome.summary()).unwrap();
    assert_eq!(json["gender"], "Female");
    assert_eq!(json["eye_color"], "Brown");
    assert_eq!(json["attributes"]["height"], 5);
    assert_eq!(json["curly_hair"], false);
}
