use super::error::{AnalysisError, AnalysisResult};
use super::formulas::{self, Saturation};
use super::los::{self, LevelOfService};
use super::tables;
use crate::config::{AnalysisParams, IntersectionVolumes, Validate};
use anyhow::Result;
use serde::Serialize;

/// Movement groups reported for a T-intersection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MovementGroup {
    /// Major road through and right turn (movements 2 and 3).
    MajorThroughRight,
    /// Minor road approach (movements 4 and 6).
    MinorApproach,
    /// Major road left turn and through (movements 7 and 8).
    MajorLeftThrough,
}

impl MovementGroup {
    pub const ALL: [MovementGroup; 3] = [
        MovementGroup::MajorThroughRight,
        MovementGroup::MinorApproach,
        MovementGroup::MajorLeftThrough,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MovementGroup::MajorThroughRight => "2-3",
            MovementGroup::MinorApproach => "4-6",
            MovementGroup::MajorLeftThrough => "7-8",
        }
    }
}

/// Conflicting volumes (veh/h) seen by the minor-priority movements.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConflictingVolumes {
    pub ih4: f64,
    pub ih6: f64,
    pub ih7: f64,
}

impl ConflictingVolumes {
    pub fn from_volumes(volumes: &IntersectionVolumes) -> Self {
        let i2 = volumes.i2 as f64;
        let i3 = volumes.i3 as f64;
        let i7 = volumes.i7 as f64;
        let i8 = volumes.i8 as f64;

        Self {
            ih4: (i2 + 0.5 * i3 + i8 + i7).round_ties_even(),
            ih6: (i2 + 0.5 * i3).round_ties_even(),
            ih7: i2 + i3,
        }
    }
}

/// Per-movement capacities (veh/h) and the movement 7 blocking factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovementCapacities {
    pub c2: f64,
    pub c3: f64,
    pub c8: f64,
    /// Movement 4 before discounting by movement 7's queue.
    pub c4_base: f64,
    pub c4: f64,
    pub c6: f64,
    pub c7: f64,
    /// Probability that movement 7 has no queue.
    pub p0_7: f64,
}

/// Load coefficients of the six movements.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovementSaturations {
    pub a2: Saturation,
    pub a3: Saturation,
    pub a4: Saturation,
    pub a6: Saturation,
    pub a7: Saturation,
    pub a8: Saturation,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupResult {
    #[serde(skip)]
    pub group: MovementGroup,
    pub volume: u64,
    pub capacity: u32,
    /// Mean control delay in seconds, rounded to hundredths.
    pub delay: f64,
    /// 95th-percentile queue length, rounded to hundredths.
    pub queue_length: f64,
    pub level_of_service: LevelOfService,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IntersectionAnalysis {
    pub volumes: IntersectionVolumes,
    pub conflicting: ConflictingVolumes,
    pub capacities: MovementCapacities,
    pub saturations: MovementSaturations,
    pub groups: [GroupResult; 3],
}

impl IntersectionAnalysis {
    pub fn group(&self, group: MovementGroup) -> &GroupResult {
        match group {
            MovementGroup::MajorThroughRight => &self.groups[0],
            MovementGroup::MinorApproach => &self.groups[1],
            MovementGroup::MajorLeftThrough => &self.groups[2],
        }
    }
}

pub struct CapacityAnalyzer {
    params: AnalysisParams,
}

impl CapacityAnalyzer {
    pub fn new(params: AnalysisParams) -> Result<Self> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &AnalysisParams {
        &self.params
    }

    pub fn analyze(&self, volumes: &IntersectionVolumes) -> AnalysisResult<IntersectionAnalysis> {
        let conflicting = ConflictingVolumes::from_volumes(volumes);
        log::debug!(
            "Conflicting volumes: ih4={} ih6={} ih7={}",
            conflicting.ih4,
            conflicting.ih6,
            conflicting.ih7
        );

        let capacities = self.movement_capacities(volumes, &conflicting)?;
        let saturations = MovementSaturations {
            a2: formulas::load_coefficient(volumes.i2 as f64, capacities.c2),
            a3: formulas::load_coefficient(volumes.i3 as f64, capacities.c3),
            a4: formulas::load_coefficient(volumes.i4 as f64, capacities.c4),
            a6: formulas::load_coefficient(volumes.i6 as f64, capacities.c6),
            a7: formulas::load_coefficient(volumes.i7 as f64, capacities.c7),
            a8: formulas::load_coefficient(volumes.i8 as f64, capacities.c8),
        };
        log::debug!("Load coefficients: {:?}", saturations);

        let groups = [
            self.free_flow_group(volumes.i2 as u64 + volumes.i3 as u64),
            self.controlled_group(
                MovementGroup::MinorApproach,
                volumes.i4 as u64 + volumes.i6 as u64,
                &[saturations.a4, saturations.a6],
            )?,
            self.controlled_group(
                MovementGroup::MajorLeftThrough,
                volumes.i7 as u64 + volumes.i8 as u64,
                &[saturations.a7, saturations.a8],
            )?,
        ];

        Ok(IntersectionAnalysis {
            volumes: *volumes,
            conflicting,
            capacities,
            saturations,
            groups,
        })
    }

    fn movement_capacity(&self, flow: u8, conflicting_volume: f64) -> AnalysisResult<f64> {
        let tf = tables::follow_up_time(flow, self.params.priority_sign)?;
        let tg = tables::critical_gap(flow, self.params.free_flow_speed)?;
        formulas::base_capacity(tf, tg, conflicting_volume)
    }

    fn movement_capacities(
        &self,
        volumes: &IntersectionVolumes,
        conflicting: &ConflictingVolumes,
    ) -> AnalysisResult<MovementCapacities> {
        let design = self.params.design_capacity;

        // Movement 7 has to be known before movement 4 can be discounted.
        let c7 = self.movement_capacity(7, conflicting.ih7)?;
        let c6 = self.movement_capacity(6, conflicting.ih6)?;
        let c4_base = self.movement_capacity(4, conflicting.ih4)?;
        let p0_7 = formulas::unblocked_probability(volumes.i7 as f64, c7);
        let c4 = c4_base * p0_7;

        log::debug!(
            "Movement capacities: c4={:.2} (base {:.2}, p0,7={:.4}) c6={:.2} c7={:.2}",
            c4,
            c4_base,
            p0_7,
            c6,
            c7
        );

        Ok(MovementCapacities {
            c2: design,
            c3: design,
            c8: design,
            c4_base,
            c4,
            c6,
            c7,
            p0_7,
        })
    }

    fn free_flow_group(&self, volume: u64) -> GroupResult {
        let capacity = self.params.design_capacity.round_ties_even() as u32;
        let level_of_service = los::classify(volume as f64, capacity as f64, 0.0);

        GroupResult {
            group: MovementGroup::MajorThroughRight,
            volume,
            capacity,
            delay: 0.0,
            queue_length: 0.0,
            level_of_service,
        }
    }

    fn controlled_group(
        &self,
        group: MovementGroup,
        volume: u64,
        saturations: &[Saturation],
    ) -> AnalysisResult<GroupResult> {
        let capacity = blended_capacity(group, volume, saturations)?;
        let (volume_f, capacity_f) = (volume as f64, capacity as f64);

        let delay = round_hundredths(formulas::mean_delay(
            volume_f,
            capacity_f,
            self.params.analysis_period,
        )?);
        let queue_length = round_hundredths(formulas::queue_length(volume_f, capacity_f)?);
        let level_of_service = los::classify(volume_f, capacity_f, delay);

        log::debug!(
            "Group {}: volume={} capacity={} delay={:.2}s queue={:.2} LOS {}",
            group.label(),
            volume,
            capacity,
            delay,
            queue_length,
            level_of_service
        );

        Ok(GroupResult {
            group,
            volume,
            capacity,
            delay,
            queue_length,
            level_of_service,
        })
    }
}

/// Group capacity as total volume over the summed load coefficients of its movements.
fn blended_capacity(
    group: MovementGroup,
    volume: u64,
    saturations: &[Saturation],
) -> AnalysisResult<u32> {
    let mut total = 0.0;
    for saturation in saturations {
        match saturation.ratio() {
            Some(ratio) => total += ratio,
            None => return Err(AnalysisError::UndefinedGroupCapacity(group.label())),
        }
    }

    if total <= 0.0 {
        return Err(AnalysisError::UndefinedGroupCapacity(group.label()));
    }

    Ok((volume as f64 / total).round_ties_even() as u32)
}

fn round_hundredths(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}
