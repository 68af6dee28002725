use std::collections::HashMap;

use crate::directory::ParameterDirectory;

/// Raw-name spellings accepted for each canonical WD symbol. Identity
/// rows (canonical name mapping to itself) are deliberate: they let the
/// exact-case pass claim a name before any case folding happens.
const ALIAS_ROWS: &[(&str, &str)] = &[
    // orbital geometry and axis
    ("SEMI_MAJOR_AXIS", "A"),
    ("SEMI_MAJ_AXIS", "A"),
    ("SMA", "A"),
    ("AXIS", "A"),
    ("A1_PLUS_A2", "A"),
    ("INCLINATION", "INCL"),
    ("INCL", "INCL"),
    ("ORBITAL_INCLINATION", "INCL"),
    ("I", "INCL"),
    ("ECCENTRICITY", "ECC"),
    ("ECC", "ECC"),
    ("E", "ECC"),
    ("VGAM", "VGAM"),
    ("V_GAMMA", "VGAM"),
    ("SYSTEMIC_VELOCITY", "VGAM"),
    ("GAMMA_VEL", "VGAM"),
    ("GAMMA", "VGAM"),
    // mass and potential
    ("MASS_RATIO", "q"),
    ("q", "q"),
    ("M2_M1", "q"),
    ("M2/M1", "q"),
    ("POTENTIAL1", "POT1"),
    ("POTENTIAL2", "POT2"),
    ("POT1", "POT1"),
    ("POT2", "POT2"),
    ("OMEGA1", "POT1"),
    ("OMEGA2", "POT2"),
    ("ROCHE_POTENTIAL1", "POT1"),
    ("ROCHE_POTENTIAL2", "POT2"),
    ("SURFACE_POTENTIAL1", "POT1"),
    ("SURFACE_POTENTIAL2", "POT2"),
    // temperatures and albedo
    ("TEMPERATURE1", "T1"),
    ("TEMPERATURE2", "T2"),
    ("TEMP1", "T1"),
    ("TEMP2", "T2"),
    ("T_EFF1", "T1"),
    ("T_EFF2", "T2"),
    ("ALBEDO1", "ALB1"),
    ("ALBEDO2", "ALB2"),
    ("ALB1", "ALB1"),
    ("ALB2", "ALB2"),
    ("GRAVITY_DARKENING1", "G1"),
    ("GRAVITY_DARKENING2", "G2"),
    ("G1", "G1"),
    ("G2", "G2"),
    ("METALLICITY", "MH"),
    ("MH", "MH"),
    ("[M/H]", "MH"),
    ("FE/H", "MH"),
    // timing and ephemeris
    ("PERIOD", "P0"),
    ("P0", "P0"),
    ("ORBITAL_PERIOD", "P0"),
    ("EPOCH", "HJD0"),
    ("HJD0", "HJD0"),
    ("T0", "HJD0"),
    ("REFERENCE_EPOCH", "HJD0"),
    ("PHASE_SHIFT", "PHS"),
    ("PHS", "PHS"),
    ("PSHIFT", "PHS"),
    ("DPDT", "DPDT"),
    ("DP/DT", "DPDT"),
    ("PERIOD_CHANGE", "DPDT"),
    ("DWDOT", "DWDOT"),
    ("PERIASTRON_ADVANCE", "DWDOT"),
    ("DW/DT", "DWDOT"),
    // rotation and atmosphere
    ("SYNC1", "F1"),
    ("SYNC2", "F2"),
    ("SYNCHRONICITY1", "F1"),
    ("SYNCHRONICITY2", "F2"),
    ("ROTATION1", "F1"),
    ("ROTATION2", "F2"),
    ("F1", "F1"),
    ("F2", "F2"),
    ("ATMOSPHERE1", "IFAT1"),
    ("ATMOSPHERE2", "IFAT2"),
    ("IFAT1", "IFAT1"),
    ("IFAT2", "IFAT2"),
    // luminosity and limb darkening
    ("LUMINOSITY1", "L1"),
    ("LUMINOSITY2", "L2"),
    ("L1", "L1"),
    ("L2", "L2"),
    ("BRIGHTNESS1", "L1"),
    ("BRIGHTNESS2", "L2"),
    ("LIMB_DARKENING1", "X1"),
    ("LIMB_DARKENING2", "X2"),
    ("X1", "X1"),
    ("X2", "X2"),
    ("BOLOMETRIC_LD1", "X1BOLO"),
    ("BOLOMETRIC_LD2", "X2BOLO"),
    ("X1BOLO", "X1BOLO"),
    ("X2BOLO", "X2BOLO"),
    ("THIRD_LIGHT", "EL3"),
    ("L3", "EL3"),
    ("EL3", "EL3"),
    // third body
    ("3B_PERIOD", "P3B"),
    ("P3B", "P3B"),
    ("3RD_BODY_PERIOD", "P3B"),
    ("3B_INCLINATION", "INCL3B"),
    ("I3B", "INCL3B"),
    ("INCL3B", "INCL3B"),
    ("3B_ECCENTRICITY", "E3B"),
    ("E3B", "E3B"),
    ("3B_ECC", "E3B"),
    ("3B_SMA", "A3B"),
    ("A3B", "A3B"),
    ("3B_AXIS", "A3B"),
    // numerical controls
    ("SMEARING", "DELPH"),
    ("PHASE_INTEGRATION", "DELPH"),
    ("DELPH", "DELPH"),
    ("GRID1", "N1"),
    ("GRID2", "N2"),
    ("N1", "N1"),
    ("N2", "N2"),
    ("GAUSSIAN_POINTS", "NGA"),
    ("NGA", "NGA"),
    // DC step sizes
    ("STEP_A", "DEL_A"),
    ("STEP_E", "DEL_E"),
    ("STEP_I", "DEL_I"),
    ("STEP_Q", "DEL_Q"),
    ("DEL_A", "DEL_A"),
    ("DEL_E", "DEL_E"),
    ("DEL_I", "DEL_I"),
    ("DEL_Q", "DEL_Q"),
];

/// Maps human-friendly parameter spellings onto canonical WD symbols.
pub struct AliasResolver {
    aliases: HashMap<&'static str, &'static str>,
}

impl AliasResolver {
    /// Resolver over the standard WD alias rows.
    pub fn standard() -> Self {
        Self {
            aliases: ALIAS_ROWS.iter().copied().collect(),
        }
    }

    /// Resolve a raw name in exactly two attempts.
    ///
    /// 1. Exact, case-sensitive: alias hit or the raw name itself. This
    ///    pass is what lets the lowercase mass-ratio symbol `q` win
    ///    before any case folding can turn it into something else.
    /// 2. If that candidate has no directory row, retry with the
    ///    upper-cased raw name.
    ///
    /// The second candidate is returned even when the directory does
    /// not know it either; the caller decides what an unmapped name
    /// means.
    pub fn resolve(&self, raw: &str, directory: &ParameterDirectory) -> String {
        let exact = self
            .aliases
            .get(raw)
            .map(|target| (*target).to_owned())
            .unwrap_or_else(|| raw.to_owned());
        if directory.contains(&exact) {
            return exact;
        }

        let upper = raw.to_uppercase();
        match self.aliases.get(upper.as_str()) {
            Some(target) => (*target).to_owned(),
            None => upper,
        }
    }
}

impl Default for AliasResolver {
    fn default() -> Self {
        Self::standard()
    }
}
