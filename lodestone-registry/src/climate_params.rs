//! Climate parameter lists for the 1.18+ overworld.
//!
//! The list enumerates every surface/underground/bottom biome volume of the
//! overworld: a temperature × humidity grid swept across weirdness slices
//! (valley, low, mid, high, peak) and continentalness bands, exactly the way
//! the game's overworld biome builder emits them. Entry order is part of
//! the contract: decision-tree ties resolve to the earliest entry.

use std::sync::LazyLock;

use lodestone_utils::climate::{Parameter, ParameterPoint};

use crate::BiomeId;
use crate::biome_id::*;
use crate::version::McVersion;

/// One biome volume.
pub type ClimateEntry = (ParameterPoint, BiomeId);

const FULL_RANGE: Parameter = Parameter { min: -10000, max: 10000 };

struct OverworldBiomeBuilder {
    mc: McVersion,
    temperatures: [Parameter; 5],
    humidities: [Parameter; 5],
    erosions: [Parameter; 7],
    mushroom_fields_continentalness: Parameter,
    deep_ocean_continentalness: Parameter,
    ocean_continentalness: Parameter,
    coast_continentalness: Parameter,
    near_inland_continentalness: Parameter,
    mid_inland_continentalness: Parameter,
    far_inland_continentalness: Parameter,
    entries: Vec<ClimateEntry>,
}

const OCEANS: [[BiomeId; 5]; 2] = [
    [
        DEEP_FROZEN_OCEAN,
        DEEP_COLD_OCEAN,
        DEEP_OCEAN,
        DEEP_LUKEWARM_OCEAN,
        WARM_OCEAN,
    ],
    [FROZEN_OCEAN, COLD_OCEAN, OCEAN, LUKEWARM_OCEAN, WARM_OCEAN],
];

const MIDDLE_BIOMES: [[BiomeId; 5]; 5] = [
    [SNOWY_PLAINS, SNOWY_PLAINS, SNOWY_PLAINS, SNOWY_TAIGA, TAIGA],
    [PLAINS, PLAINS, FOREST, TAIGA, OLD_GROWTH_SPRUCE_TAIGA],
    [FLOWER_FOREST, PLAINS, FOREST, BIRCH_FOREST, DARK_FOREST],
    [SAVANNA, SAVANNA, FOREST, JUNGLE, JUNGLE],
    [DESERT, DESERT, DESERT, DESERT, DESERT],
];

const NONE_ID: BiomeId = crate::NONE;

const MIDDLE_BIOMES_VARIANT: [[BiomeId; 5]; 5] = [
    [ICE_SPIKES, NONE_ID, SNOWY_TAIGA, NONE_ID, NONE_ID],
    [NONE_ID, NONE_ID, NONE_ID, NONE_ID, OLD_GROWTH_PINE_TAIGA],
    [SUNFLOWER_PLAINS, NONE_ID, NONE_ID, OLD_GROWTH_BIRCH_FOREST, NONE_ID],
    [NONE_ID, NONE_ID, PLAINS, SPARSE_JUNGLE, BAMBOO_JUNGLE],
    [NONE_ID, NONE_ID, NONE_ID, NONE_ID, NONE_ID],
];

const PLATEAU_BIOMES: [[BiomeId; 5]; 5] = [
    [SNOWY_PLAINS, SNOWY_PLAINS, SNOWY_PLAINS, SNOWY_TAIGA, SNOWY_TAIGA],
    [MEADOW, MEADOW, FOREST, TAIGA, OLD_GROWTH_SPRUCE_TAIGA],
    [MEADOW, MEADOW, MEADOW, MEADOW, DARK_FOREST],
    [SAVANNA_PLATEAU, SAVANNA_PLATEAU, FOREST, FOREST, JUNGLE],
    [BADLANDS, BADLANDS, BADLANDS, WOODED_BADLANDS, WOODED_BADLANDS],
];

const PLATEAU_BIOMES_VARIANT: [[BiomeId; 5]; 5] = [
    [ICE_SPIKES, NONE_ID, NONE_ID, NONE_ID, NONE_ID],
    [NONE_ID, NONE_ID, MEADOW, MEADOW, OLD_GROWTH_PINE_TAIGA],
    [NONE_ID, NONE_ID, FOREST, BIRCH_FOREST, NONE_ID],
    [NONE_ID, NONE_ID, NONE_ID, NONE_ID, NONE_ID],
    [ERODED_BADLANDS, ERODED_BADLANDS, NONE_ID, NONE_ID, NONE_ID],
];

const SHATTERED_BIOMES: [[BiomeId; 5]; 5] = [
    [
        WINDSWEPT_GRAVELLY_HILLS,
        WINDSWEPT_GRAVELLY_HILLS,
        WINDSWEPT_HILLS,
        WINDSWEPT_FOREST,
        WINDSWEPT_FOREST,
    ],
    [
        WINDSWEPT_GRAVELLY_HILLS,
        WINDSWEPT_GRAVELLY_HILLS,
        WINDSWEPT_HILLS,
        WINDSWEPT_FOREST,
        WINDSWEPT_FOREST,
    ],
    [
        WINDSWEPT_HILLS,
        WINDSWEPT_HILLS,
        WINDSWEPT_HILLS,
        WINDSWEPT_FOREST,
        WINDSWEPT_FOREST,
    ],
    [NONE_ID, NONE_ID, NONE_ID, NONE_ID, NONE_ID],
    [NONE_ID, NONE_ID, NONE_ID, NONE_ID, NONE_ID],
];

fn span(a: Parameter, b: Parameter) -> Parameter {
    Parameter::new(a.min, b.max)
}

impl OverworldBiomeBuilder {
    fn new(mc: McVersion) -> Self {
        Self {
            mc,
            temperatures: [
                Parameter::span(-1.0, -0.45),
                Parameter::span(-0.45, -0.15),
                Parameter::span(-0.15, 0.2),
                Parameter::span(0.2, 0.55),
                Parameter::span(0.55, 1.0),
            ],
            humidities: [
                Parameter::span(-1.0, -0.35),
                Parameter::span(-0.35, -0.1),
                Parameter::span(-0.1, 0.1),
                Parameter::span(0.1, 0.3),
                Parameter::span(0.3, 1.0),
            ],
            erosions: [
                Parameter::span(-1.0, -0.78),
                Parameter::span(-0.78, -0.375),
                Parameter::span(-0.375, -0.2225),
                Parameter::span(-0.2225, 0.05),
                Parameter::span(0.05, 0.45),
                Parameter::span(0.45, 0.55),
                Parameter::span(0.55, 1.0),
            ],
            mushroom_fields_continentalness: Parameter::span(-1.2, -1.05),
            deep_ocean_continentalness: Parameter::span(-1.05, -0.455),
            ocean_continentalness: Parameter::span(-0.455, -0.19),
            coast_continentalness: Parameter::span(-0.19, -0.11),
            near_inland_continentalness: Parameter::span(-0.11, 0.03),
            mid_inland_continentalness: Parameter::span(0.03, 0.3),
            far_inland_continentalness: Parameter::span(0.3, 1.0),
            entries: Vec::with_capacity(512),
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn surface(
        &mut self,
        t: Parameter,
        h: Parameter,
        c: Parameter,
        e: Parameter,
        w: Parameter,
        offset: f32,
        biome: BiomeId,
    ) {
        self.entries.push((
            ParameterPoint::new(t, h, c, e, Parameter::point(0.0), w, offset),
            biome,
        ));
        self.entries.push((
            ParameterPoint::new(t, h, c, e, Parameter::point(1.0), w, offset),
            biome,
        ));
    }

    #[allow(clippy::too_many_arguments)]
    fn underground(
        &mut self,
        t: Parameter,
        h: Parameter,
        c: Parameter,
        e: Parameter,
        w: Parameter,
        offset: f32,
        biome: BiomeId,
    ) {
        self.entries.push((
            ParameterPoint::new(t, h, c, e, Parameter::span(0.2, 0.9), w, offset),
            biome,
        ));
    }

    #[allow(clippy::too_many_arguments)]
    fn bottom(
        &mut self,
        t: Parameter,
        h: Parameter,
        c: Parameter,
        e: Parameter,
        w: Parameter,
        offset: f32,
        biome: BiomeId,
    ) {
        self.entries.push((
            ParameterPoint::new(t, h, c, e, Parameter::point(1.1), w, offset),
            biome,
        ));
    }

    // ── biome pickers ───────────────────────────────────────────────────────

    fn pick_middle(&self, i: usize, j: usize, w: Parameter) -> BiomeId {
        if w.max < 0 {
            return MIDDLE_BIOMES[i][j];
        }
        let v = MIDDLE_BIOMES_VARIANT[i][j];
        if v == NONE_ID { MIDDLE_BIOMES[i][j] } else { v }
    }

    fn pick_middle_or_badlands(&self, i: usize, j: usize, w: Parameter) -> BiomeId {
        if i == 4 {
            self.pick_badlands(j, w)
        } else {
            self.pick_middle(i, j, w)
        }
    }

    fn pick_middle_or_badlands_or_slope(&self, i: usize, j: usize, w: Parameter) -> BiomeId {
        if i == 0 {
            self.pick_slope(i, j, w)
        } else {
            self.pick_middle_or_badlands(i, j, w)
        }
    }

    fn pick_shattered(&self, i: usize, j: usize, w: Parameter) -> BiomeId {
        let v = SHATTERED_BIOMES[i][j];
        if v == NONE_ID {
            self.pick_middle(i, j, w)
        } else {
            v
        }
    }

    fn maybe_windswept_savanna(&self, i: usize, j: usize, w: Parameter, fallback: BiomeId) -> BiomeId {
        if i > 1 && j < 4 && w.max >= 0 {
            WINDSWEPT_SAVANNA
        } else {
            fallback
        }
    }

    fn pick_shattered_coast(&self, i: usize, j: usize, w: Parameter) -> BiomeId {
        let base = if w.max >= 0 {
            self.pick_middle(i, j, w)
        } else {
            self.pick_beach(i, j)
        };
        self.maybe_windswept_savanna(i, j, w, base)
    }

    fn pick_beach(&self, i: usize, _j: usize) -> BiomeId {
        if i == 0 {
            SNOWY_BEACH
        } else if i == 4 {
            DESERT
        } else {
            BEACH
        }
    }

    fn pick_badlands(&self, j: usize, w: Parameter) -> BiomeId {
        if j < 2 {
            if w.max < 0 { BADLANDS } else { ERODED_BADLANDS }
        } else if j < 3 {
            BADLANDS
        } else {
            WOODED_BADLANDS
        }
    }

    fn pick_plateau(&self, i: usize, j: usize, w: Parameter) -> BiomeId {
        if w.max < 0 {
            return PLATEAU_BIOMES[i][j];
        }
        let v = PLATEAU_BIOMES_VARIANT[i][j];
        if v == NONE_ID { PLATEAU_BIOMES[i][j] } else { v }
    }

    fn pick_peak(&self, i: usize, j: usize, w: Parameter) -> BiomeId {
        if i <= 2 {
            if w.max < 0 { JAGGED_PEAKS } else { FROZEN_PEAKS }
        } else if i == 3 {
            STONY_PEAKS
        } else {
            self.pick_badlands(j, w)
        }
    }

    fn pick_slope(&self, i: usize, j: usize, w: Parameter) -> BiomeId {
        if i >= 3 {
            self.pick_plateau(i, j, w)
        } else if j <= 1 {
            SNOWY_SLOPES
        } else {
            GROVE
        }
    }

    fn pick_swamp(&self, i: usize) -> BiomeId {
        if self.mc >= McVersion::V1_19_2 && i >= 3 {
            MANGROVE_SWAMP
        } else {
            SWAMP
        }
    }

    // ── builder passes ─────────────────────────────────────────────────────

    fn add_biomes(&mut self) {
        self.add_off_coast_biomes();
        self.add_inland_biomes();
        self.add_underground_biomes();
    }

    fn add_off_coast_biomes(&mut self) {
        self.surface(
            FULL_RANGE,
            FULL_RANGE,
            self.mushroom_fields_continentalness,
            FULL_RANGE,
            FULL_RANGE,
            0.0,
            MUSHROOM_FIELDS,
        );
        for i in 0..5 {
            let t = self.temperatures[i];
            self.surface(
                t,
                FULL_RANGE,
                self.deep_ocean_continentalness,
                FULL_RANGE,
                FULL_RANGE,
                0.0,
                OCEANS[0][i],
            );
            self.surface(
                t,
                FULL_RANGE,
                self.ocean_continentalness,
                FULL_RANGE,
                FULL_RANGE,
                0.0,
                OCEANS[1][i],
            );
        }
    }

    fn add_inland_biomes(&mut self) {
        self.add_mid_slice(Parameter::span(-1.0, -0.933_333_34));
        self.add_high_slice(Parameter::span(-0.933_333_34, -0.766_666_7));
        self.add_peaks(Parameter::span(-0.766_666_7, -0.566_666_66));
        self.add_high_slice(Parameter::span(-0.566_666_66, -0.4));
        self.add_mid_slice(Parameter::span(-0.4, -0.266_666_68));
        self.add_low_slice(Parameter::span(-0.266_666_68, -0.05));
        self.add_valleys(Parameter::span(-0.05, 0.05));
        self.add_low_slice(Parameter::span(0.05, 0.266_666_68));
        self.add_mid_slice(Parameter::span(0.266_666_68, 0.4));
        self.add_high_slice(Parameter::span(0.4, 0.566_666_66));
        self.add_peaks(Parameter::span(0.566_666_66, 0.766_666_7));
        self.add_high_slice(Parameter::span(0.766_666_7, 0.933_333_34));
        self.add_mid_slice(Parameter::span(0.933_333_34, 1.0));
    }

    fn add_peaks(&mut self, w: Parameter) {
        for i in 0..5 {
            let t = self.temperatures[i];
            for j in 0..5 {
                let h = self.humidities[j];
                let middle = self.pick_middle(i, j, w);
                let middle_or_slope = self.pick_middle_or_badlands_or_slope(i, j, w);
                let middle_or_badlands = self.pick_middle_or_badlands(i, j, w);
                let plateau = self.pick_plateau(i, j, w);
                let shattered = self.pick_shattered(i, j, w);
                let windswept = self.maybe_windswept_savanna(i, j, w, shattered);
                let peak = self.pick_peak(i, j, w);
                let coast = self.coast_continentalness;
                let near = self.near_inland_continentalness;
                let mid = self.mid_inland_continentalness;
                let far = self.far_inland_continentalness;
                let e = self.erosions;

                self.surface(t, h, span(coast, far), e[0], w, 0.0, peak);
                self.surface(t, h, span(coast, near), e[1], w, 0.0, middle_or_slope);
                self.surface(t, h, span(mid, far), e[1], w, 0.0, peak);
                self.surface(t, h, span(coast, near), span(e[2], e[3]), w, 0.0, middle);
                self.surface(t, h, span(mid, far), e[2], w, 0.0, plateau);
                self.surface(t, h, mid, e[3], w, 0.0, middle_or_badlands);
                self.surface(t, h, far, e[3], w, 0.0, plateau);
                self.surface(t, h, span(coast, far), e[4], w, 0.0, middle);
                self.surface(t, h, span(coast, near), e[5], w, 0.0, windswept);
                self.surface(t, h, span(mid, far), e[5], w, 0.0, shattered);
                self.surface(t, h, span(coast, far), e[6], w, 0.0, middle);
            }
        }
    }

    fn add_high_slice(&mut self, w: Parameter) {
        for i in 0..5 {
            let t = self.temperatures[i];
            for j in 0..5 {
                let h = self.humidities[j];
                let middle = self.pick_middle(i, j, w);
                let middle_or_badlands = self.pick_middle_or_badlands(i, j, w);
                let middle_or_slope = self.pick_middle_or_badlands_or_slope(i, j, w);
                let plateau = self.pick_plateau(i, j, w);
                let shattered = self.pick_shattered(i, j, w);
                let windswept = self.maybe_windswept_savanna(i, j, w, middle);
                let slope = self.pick_slope(i, j, w);
                let peak = self.pick_peak(i, j, w);
                let coast = self.coast_continentalness;
                let near = self.near_inland_continentalness;
                let mid = self.mid_inland_continentalness;
                let far = self.far_inland_continentalness;
                let e = self.erosions;

                self.surface(t, h, coast, span(e[0], e[1]), w, 0.0, middle);
                self.surface(t, h, near, e[0], w, 0.0, slope);
                self.surface(t, h, span(mid, far), e[0], w, 0.0, peak);
                self.surface(t, h, near, e[1], w, 0.0, middle_or_slope);
                self.surface(t, h, span(mid, far), e[1], w, 0.0, slope);
                self.surface(t, h, span(coast, near), span(e[2], e[3]), w, 0.0, middle);
                self.surface(t, h, span(mid, far), e[2], w, 0.0, plateau);
                self.surface(t, h, mid, e[3], w, 0.0, middle_or_badlands);
                self.surface(t, h, far, e[3], w, 0.0, plateau);
                self.surface(t, h, span(coast, far), e[4], w, 0.0, middle);
                self.surface(t, h, span(coast, near), e[5], w, 0.0, windswept);
                self.surface(t, h, span(mid, far), e[5], w, 0.0, shattered);
                self.surface(t, h, span(coast, far), e[6], w, 0.0, middle);
            }
        }
    }

    fn add_mid_slice(&mut self, w: Parameter) {
        for i in 0..5 {
            let t = self.temperatures[i];
            for j in 0..5 {
                let h = self.humidities[j];
                let middle = self.pick_middle(i, j, w);
                let middle_or_badlands = self.pick_middle_or_badlands(i, j, w);
                let middle_or_slope = self.pick_middle_or_badlands_or_slope(i, j, w);
                let shattered = self.pick_shattered(i, j, w);
                let plateau = self.pick_plateau(i, j, w);
                let beach = self.pick_beach(i, j);
                let windswept = self.maybe_windswept_savanna(i, j, w, middle);
                let shattered_coast = self.pick_shattered_coast(i, j, w);
                let slope = self.pick_slope(i, j, w);
                let coast = self.coast_continentalness;
                let near = self.near_inland_continentalness;
                let mid = self.mid_inland_continentalness;
                let far = self.far_inland_continentalness;
                let e = self.erosions;

                self.surface(t, h, span(near, far), e[0], w, 0.0, slope);
                self.surface(t, h, span(near, mid), e[1], w, 0.0, middle_or_slope);
                self.surface(
                    t,
                    h,
                    far,
                    e[1],
                    w,
                    0.0,
                    if i == 0 { slope } else { plateau },
                );
                self.surface(t, h, near, e[2], w, 0.0, middle);
                self.surface(t, h, mid, e[2], w, 0.0, middle_or_badlands);
                self.surface(t, h, far, e[2], w, 0.0, plateau);
                self.surface(t, h, span(coast, near), e[3], w, 0.0, middle);
                self.surface(t, h, span(mid, far), e[3], w, 0.0, middle_or_badlands);
                if w.max < 0 {
                    self.surface(t, h, coast, e[4], w, 0.0, beach);
                    self.surface(t, h, span(near, far), e[4], w, 0.0, middle);
                } else {
                    self.surface(t, h, span(coast, far), e[4], w, 0.0, middle);
                }
                self.surface(t, h, coast, e[5], w, 0.0, shattered_coast);
                self.surface(t, h, near, e[5], w, 0.0, windswept);
                self.surface(t, h, span(mid, far), e[5], w, 0.0, shattered);
                if w.max < 0 {
                    self.surface(t, h, coast, e[6], w, 0.0, beach);
                } else {
                    self.surface(t, h, coast, e[6], w, 0.0, middle);
                }
                if i == 0 {
                    self.surface(t, h, span(near, far), e[6], w, 0.0, middle);
                } else {
                    let swamp = self.pick_swamp(i);
                    self.surface(t, h, span(near, far), e[6], w, 0.0, swamp);
                }
            }
        }
    }

    fn add_low_slice(&mut self, w: Parameter) {
        for i in 0..5 {
            let t = self.temperatures[i];
            for j in 0..5 {
                let h = self.humidities[j];
                let middle = self.pick_middle(i, j, w);
                let middle_or_badlands = self.pick_middle_or_badlands(i, j, w);
                let middle_or_slope = self.pick_middle_or_badlands_or_slope(i, j, w);
                let beach = self.pick_beach(i, j);
                let windswept = self.maybe_windswept_savanna(i, j, w, middle);
                let shattered_coast = self.pick_shattered_coast(i, j, w);
                let coast = self.coast_continentalness;
                let near = self.near_inland_continentalness;
                let mid = self.mid_inland_continentalness;
                let far = self.far_inland_continentalness;
                let e = self.erosions;

                self.surface(t, h, near, span(e[0], e[1]), w, 0.0, middle_or_badlands);
                self.surface(t, h, span(mid, far), span(e[0], e[1]), w, 0.0, middle_or_slope);
                self.surface(t, h, near, span(e[2], e[3]), w, 0.0, middle);
                self.surface(t, h, span(mid, far), span(e[2], e[3]), w, 0.0, middle_or_badlands);
                self.surface(t, h, coast, span(e[3], e[4]), w, 0.0, beach);
                self.surface(t, h, span(near, far), e[4], w, 0.0, middle);
                self.surface(t, h, coast, e[5], w, 0.0, shattered_coast);
                self.surface(t, h, near, e[5], w, 0.0, windswept);
                self.surface(t, h, span(mid, far), e[5], w, 0.0, middle);
                self.surface(t, h, coast, e[6], w, 0.0, beach);
                if i == 0 {
                    self.surface(t, h, span(near, far), e[6], w, 0.0, middle);
                } else {
                    let swamp = self.pick_swamp(i);
                    self.surface(t, h, span(near, far), e[6], w, 0.0, swamp);
                }
            }
        }
    }

    fn add_valleys(&mut self, w: Parameter) {
        for i in 0..5 {
            let t = self.temperatures[i];
            for j in 0..5 {
                let h = self.humidities[j];
                let river = if i == 0 { FROZEN_RIVER } else { RIVER };
                let coast = self.coast_continentalness;
                let near = self.near_inland_continentalness;
                let far = self.far_inland_continentalness;
                let e = self.erosions;

                self.surface(t, h, coast, span(e[0], e[1]), w, 0.0, river);
                self.surface(t, h, span(near, far), span(e[0], e[1]), w, 0.0, river);
                self.surface(t, h, coast, span(e[2], e[5]), w, 0.0, river);
                self.surface(t, h, span(near, far), span(e[2], e[5]), w, 0.0, river);
                self.surface(t, h, coast, e[6], w, 0.0, river);
                if i == 0 {
                    self.surface(t, h, span(near, far), e[6], w, 0.0, river);
                } else {
                    let swamp = self.pick_swamp(i);
                    self.surface(t, h, span(near, far), e[6], w, 0.0, swamp);
                }
            }
        }
    }

    fn add_underground_biomes(&mut self) {
        self.underground(
            FULL_RANGE,
            FULL_RANGE,
            Parameter::span(0.8, 1.0),
            FULL_RANGE,
            FULL_RANGE,
            0.0,
            DRIPSTONE_CAVES,
        );
        self.underground(
            FULL_RANGE,
            Parameter::span(0.7, 1.0),
            FULL_RANGE,
            FULL_RANGE,
            FULL_RANGE,
            0.0,
            LUSH_CAVES,
        );
        if self.mc >= McVersion::V1_19_2 {
            let e01 = span(self.erosions[0], self.erosions[1]);
            self.bottom(FULL_RANGE, FULL_RANGE, FULL_RANGE, e01, FULL_RANGE, 0.0, DEEP_DARK);
        }
    }
}

fn build(mc: McVersion) -> Vec<ClimateEntry> {
    let mut b = OverworldBiomeBuilder::new(mc);
    b.add_biomes();
    b.entries
}

static PARAMS_1_18: LazyLock<Vec<ClimateEntry>> = LazyLock::new(|| build(McVersion::V1_18));
static PARAMS_1_19: LazyLock<Vec<ClimateEntry>> = LazyLock::new(|| build(McVersion::V1_19));

/// The overworld climate parameter list for a 1.18+ release.
///
/// 1.20+ reuse the 1.19 grid.
#[must_use]
pub fn overworld_params(mc: McVersion) -> &'static [ClimateEntry] {
    if mc >= McVersion::V1_19_2 {
        &PARAMS_1_19
    } else {
        &PARAMS_1_18
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lodestone_utils::climate::{NP_DEPTH, TargetPoint};

    #[test]
    fn list_is_nonempty_and_surface_entries_are_paired() {
        let params = overworld_params(McVersion::V1_18);
        assert!(params.len() > 400, "got {}", params.len());
        // every surface volume appears once at depth 0 and once at depth 1
        let d0 = params.iter().filter(|(p, _)| p.par[NP_DEPTH].min == 0 && p.par[NP_DEPTH].max == 0);
        let d1 = params
            .iter()
            .filter(|(p, _)| p.par[NP_DEPTH].min == 10000 && p.par[NP_DEPTH].max == 10000);
        assert_eq!(d0.count(), d1.count());
    }

    #[test]
    fn deep_dark_is_gated_to_1_19() {
        assert!(!overworld_params(McVersion::V1_18).iter().any(|&(_, b)| b == DEEP_DARK));
        assert!(overworld_params(McVersion::V1_19).iter().any(|&(_, b)| b == DEEP_DARK));
        assert!(overworld_params(McVersion::V1_19).iter().any(|&(_, b)| b == MANGROVE_SWAMP));
    }

    #[test]
    fn mushroom_fields_are_far_offshore() {
        let params = overworld_params(McVersion::V1_18);
        let t = TargetPoint::new([0, 0, -11000, 0, 0, 0]);
        let (best, _) = params
            .iter()
            .map(|(p, b)| (p.distance_sq(&t), *b))
            .min_by_key(|&(d, _)| d)
            .map(|(d, b)| (b, d))
            .expect("non-empty list");
        assert_eq!(best, MUSHROOM_FIELDS);
    }
}
