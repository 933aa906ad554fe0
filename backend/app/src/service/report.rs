use std::collections::{BTreeMap, HashMap, HashSet};

use sea_orm::FromQueryResult;
use serde::Serialize;

use crate::entity::{software_detail, software_type};

use super::derived::{SoftwareSerials, parse_software_ids};

pub const UNCATEGORIZED: &str = "Uncategorized";

/// Software columns of a device, enough to aggregate installs.
#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult)]
pub struct DeviceSoftware {
    pub id: i32,
    pub software: Option<String>,
    pub software_sn: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SoftwareTotal {
    pub id: i32,
    pub software_name: String,
    /// Devices listing this software.
    pub total_install: u64,
    /// Of those, devices that also carry a serial for it.
    pub total_sn: u64,
}

/// Catalog entries grouped by type name.
pub type SoftwareReport = BTreeMap<String, Vec<SoftwareTotal>>;

#[derive(Debug, Default, Clone, Copy)]
struct Tally {
    installs: u64,
    serials: u64,
}

/// Install and serial counts per software id, one pass over the devices.
fn tally_installs(devices: &[DeviceSoftware]) -> HashMap<i32, Tally> {
    let mut tallies: HashMap<i32, Tally> = HashMap::new();

    for device in devices {
        let Some(software) = device.software.as_deref() else {
            continue;
        };

        let installed: HashSet<i32> = parse_software_ids(software).flatten().collect();
        if installed.is_empty() {
            continue;
        }

        let serials = SoftwareSerials::parse(device.software_sn.as_deref());

        for id in installed {
            let tally = tallies.entry(id).or_default();
            tally.installs += 1;
            if serials.get(id).is_some() {
                tally.serials += 1;
            }
        }
    }

    tallies
}

/// Every catalog entry appears once, including entries with no installs.
pub fn software_totals(
    catalog: &[(software_detail::Model, Option<software_type::Model>)],
    devices: &[DeviceSoftware],
) -> SoftwareReport {
    let tallies = tally_installs(devices);

    catalog
        .iter()
        .fold(SoftwareReport::new(), |mut report, (detail, software_type)| {
            let group = software_type
                .as_ref()
                .map(|t| t.software_type.clone())
                .unwrap_or_else(|| UNCATEGORIZED.to_string());
            let tally = tallies.get(&detail.id).copied().unwrap_or_default();

            report.entry(group).or_default().push(SoftwareTotal {
                id: detail.id,
                software_name: detail.software_detail.clone(),
                total_install: tally.installs,
                total_sn: tally.serials,
            });

            report
        })
}
