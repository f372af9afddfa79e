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

#[macro_export]
macro_rules! define_gene_fields {
    (
        $(
            $id:ident {
                name: $name:expr,
                description: $description:expr,
                width: $width:expr,
                offset: $offset:expr,
            }
        ),* $(,)?
    ) => {
        /// Named bit ranges of the genome word.
        #[derive(Clone, Copy, Debug, Ord, PartialOrd, Eq, PartialEq, Hash, Serialize, Deserialize)]
        pub enum GeneField {
            $(
                #[doc = $description]
                $id,
            )*
        }

        impl GeneField {
            /// Get the name of this field
            pub const fn name(&self) -> &'static str {
                match self {
                    $(
                        GeneField::$id => $name,
                    )*
                }
            }

            /// Get the description of this field
            pub const fn description(&self) -> &'static str {
                match self {
                    $(
                        GeneField::$id => $description,
                    )*
                }
            }

            /// Get the number of bits this field occupies
            pub const fn width(&self) -> u32 {
                match self {
                    $(
                        GeneField::$id => $width,
                    )*
                }
            }

            /// Get the position of the least significant bit of this field
            pub const fn offset(&self) -> u32 {
                match self {
                    $(
                        GeneField::$id => $offset,
                    )*
                }
            }

            /// Get all fields, most significant first
            pub fn all() -> &'static [GeneField] {
                &[
                    $(
                        GeneField::$id,
                    )*
                ]
            }
        }

        impl std::fmt::Display for GeneField {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.name())
            }
        }

        impl std::str::FromStr for GeneField {
            type Err = $crate::error::GenomeError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let needle = s.replace(['_', '-', ' '], "");
                Self::all()
                    .iter()
                    .find(|field| field.name().replace(' ', "").eq_ignore_ascii_case(&needle))
                    .copied()
                    .ok_or_else(|| $crate::error::GenomeError::UnknownField(s.to_string()))
            }
        }
    };
}
