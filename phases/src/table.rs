//! Compiled-in phase definitions.
//!
//! Wave-type lists give the source slowness followed by
//! `(interface, slowness)` conversions. Ray-event lists give
//! `(kind, interface)` pairs from source to receiver. Phases that are not
//! ray traced (surface waves, hydroacoustic, infrasound, unidentified
//! arrivals) carry neither list.

use crate::descriptor::PhaseDefinition;
use crate::wave::WaveType;

const P: Option<WaveType> = Some(WaveType::P);
const S: Option<WaveType> = Some(WaveType::S);
const MIXED: Option<WaveType> = None;

const fn phase(name: &'static str, primary: Option<WaveType>, description: &'static str) -> PhaseDefinition {
    PhaseDefinition::new(name, primary, description)
}

pub(crate) const PHASES: &[PhaseDefinition] = &[
    // Crustal and upper-mantle P
    phase("Pg", P, "P wave turning in the upper crust")
        .waves("PSLOWNESS")
        .events("BOTTOM, LOWER_CRUST_TOP")
        .distance(0.0, 20.0),
    phase("Pb", P, "P wave turning in the lower crust")
        .waves("PSLOWNESS")
        .events("BOTTOM, MOHO")
        .distance(0.0, 20.0),
    phase("Pn", P, "P wave turning in the uppermost mantle")
        .waves("PSLOWNESS")
        .events("BOTTOM, M410")
        .distance(0.0, 20.0),
    phase("PmP", P, "P wave reflected off the top of the Moho")
        .waves("PSLOWNESS")
        .events("TOP_SIDE_REFLECTION, MOHO")
        .distance(0.0, 20.0),
    phase("P210P", P, "P wave reflected off the top of the 210 km discontinuity")
        .waves("PSLOWNESS")
        .events("TOP_SIDE_REFLECTION, M210")
        .distance(0.0, 40.0),
    phase("P410P", P, "P wave reflected off the top of the 410 km discontinuity")
        .waves("PSLOWNESS")
        .events("TOP_SIDE_REFLECTION, M410")
        .distance(0.0, 50.0),
    phase("P660P", P, "P wave reflected off the top of the 660 km discontinuity")
        .waves("PSLOWNESS")
        .events("TOP_SIDE_REFLECTION, M660")
        .distance(0.0, 60.0),
    phase("PnPn", P, "Pn reflected once at the free surface")
        .waves("PSLOWNESS")
        .events("BOTTOM, M410, BOTTOM_SIDE_REFLECTION, FREE_SURFACE, BOTTOM, M410")
        .distance(0.0, 40.0),
    // Mantle and core-mantle boundary P
    phase("P", P, "P wave turning in the mantle")
        .waves("PSLOWNESS")
        .events("BOTTOM, CMB")
        .distance(0.0, 105.0),
    phase("Pmantle", P, "P wave turning anywhere in the mantle, any distance")
        .waves("PSLOWNESS")
        .events("BOTTOM, CMB"),
    phase("Pdiff", P, "P wave diffracted along the core-mantle boundary")
        .waves("PSLOWNESS")
        .events("BOTTOM, CMB")
        .distance(90.0, 180.0),
    phase("Pdif", P, "P wave diffracted along the core-mantle boundary")
        .waves("PSLOWNESS")
        .events("BOTTOM, CMB")
        .distance(90.0, 180.0),
    phase("PcP", P, "P wave reflected off the core-mantle boundary")
        .waves("PSLOWNESS")
        .events("TOP_SIDE_REFLECTION, CMB")
        .distance(0.0, 95.0),
    phase("PcS", MIXED, "P wave reflected off the core-mantle boundary as S")
        .waves("PSLOWNESS, CMB, SSLOWNESS")
        .events("TOP_SIDE_REFLECTION, CMB")
        .distance(0.0, 65.0),
    phase("PP", P, "P wave reflected once at the free surface")
        .waves("PSLOWNESS")
        .events("BOTTOM, CMB, BOTTOM_SIDE_REFLECTION, FREE_SURFACE, BOTTOM, CMB")
        .distance(20.0, 180.0)
        .file_name("bigP_bigP"),
    phase("PPP", P, "P wave reflected twice at the free surface")
        .waves("PSLOWNESS")
        .events(
            "BOTTOM, CMB, BOTTOM_SIDE_REFLECTION, FREE_SURFACE, BOTTOM, CMB, \
             BOTTOM_SIDE_REFLECTION, FREE_SURFACE, BOTTOM, CMB",
        )
        .distance(30.0, 180.0),
    phase("PS", MIXED, "P wave converted to S on reflection at the free surface")
        .waves("PSLOWNESS, FREE_SURFACE, SSLOWNESS")
        .events("BOTTOM, CMB, BOTTOM_SIDE_REFLECTION, FREE_SURFACE, BOTTOM, CMB")
        .distance(20.0, 180.0)
        .file_name("bigP_bigS"),
    // Core P
    phase("PKP", P, "P wave through the outer core")
        .waves("PSLOWNESS")
        .events("BOTTOM, ICB")
        .distance(110.0, 180.0),
    phase("PKPab", P, "PKP turning in the mid outer core")
        .waves("PSLOWNESS")
        .events("BOTTOM, ICB")
        .distance(143.0, 180.0),
    phase("PKPbc", P, "PKP turning in the lowermost outer core")
        .waves("PSLOWNESS")
        .events("BOTTOM, ICB")
        .distance(143.0, 156.0),
    phase("PKPdf", P, "P wave through the inner core")
        .waves("PSLOWNESS")
        .distance(110.0, 180.0),
    phase("PKiKP", P, "P wave reflected off the inner core boundary")
        .waves("PSLOWNESS")
        .events("TOP_SIDE_REFLECTION, ICB"),
    phase("PKKP", P, "P wave reflected once off the underside of the core-mantle boundary")
        .waves("PSLOWNESS")
        .events("BOTTOM, ICB, BOTTOM_SIDE_REFLECTION, CMB, BOTTOM, ICB")
        .distance(60.0, 130.0),
    phase("PKKPab", P, "PKKP turning in the mid outer core")
        .waves("PSLOWNESS")
        .events("BOTTOM, ICB, BOTTOM_SIDE_REFLECTION, CMB, BOTTOM, ICB")
        .distance(100.0, 130.0),
    phase("PKKPbc", P, "PKKP turning in the lowermost outer core")
        .waves("PSLOWNESS")
        .events("BOTTOM, ICB, BOTTOM_SIDE_REFLECTION, CMB, BOTTOM, ICB")
        .distance(75.0, 110.0),
    phase("PKKPdf", P, "PKKP through the inner core")
        .waves("PSLOWNESS")
        .events("BOTTOM_SIDE_REFLECTION, CMB")
        .distance(60.0, 130.0),
    phase("PKPPKP", P, "PKP reflected once at the free surface")
        .waves("PSLOWNESS")
        .events("BOTTOM, ICB, BOTTOM_SIDE_REFLECTION, FREE_SURFACE, BOTTOM, ICB")
        .distance(50.0, 80.0),
    // Core P converted to S
    phase("PKS", MIXED, "P wave through the outer core leaving the core as S")
        .waves("PSLOWNESS, CMB, SSLOWNESS")
        .events("BOTTOM, ICB")
        .distance(120.0, 180.0),
    phase("PKSab", MIXED, "PKS turning in the mid outer core")
        .waves("PSLOWNESS, CMB, SSLOWNESS")
        .events("BOTTOM, ICB")
        .distance(130.0, 180.0),
    phase("PKSbc", MIXED, "PKS turning in the lowermost outer core")
        .waves("PSLOWNESS, CMB, SSLOWNESS")
        .events("BOTTOM, ICB")
        .distance(130.0, 150.0),
    phase("PKSdf", MIXED, "PKS through the inner core")
        .waves("PSLOWNESS, CMB, SSLOWNESS")
        .distance(110.0, 180.0),
    phase("PKiKS", MIXED, "P wave reflected off the inner core boundary leaving the core as S")
        .waves("PSLOWNESS, CMB, SSLOWNESS")
        .events("TOP_SIDE_REFLECTION, ICB"),
    phase("PKKS", MIXED, "PKKP leaving the core as S")
        .waves("PSLOWNESS, CMB, SSLOWNESS")
        .events("BOTTOM, ICB, BOTTOM_SIDE_REFLECTION, CMB, BOTTOM, ICB")
        .distance(60.0, 130.0),
    phase("PKKSab", MIXED, "PKKS turning in the mid outer core")
        .waves("PSLOWNESS, CMB, SSLOWNESS")
        .events("BOTTOM, ICB, BOTTOM_SIDE_REFLECTION, CMB, BOTTOM, ICB")
        .distance(100.0, 130.0),
    phase("PKKSbc", MIXED, "PKKS turning in the lowermost outer core")
        .waves("PSLOWNESS, CMB, SSLOWNESS")
        .events("BOTTOM, ICB, BOTTOM_SIDE_REFLECTION, CMB, BOTTOM, ICB")
        .distance(75.0, 110.0),
    phase("PKKSdf", MIXED, "PKKS through the inner core")
        .waves("PSLOWNESS, CMB, SSLOWNESS")
        .events("BOTTOM_SIDE_REFLECTION, CMB")
        .distance(60.0, 130.0),
    // Depth phases leaving the source upward as P
    phase("pP", P, "Upgoing P reflected at the free surface near the source")
        .waves("PSLOWNESS")
        .events("BOTTOM_SIDE_REFLECTION, FREE_SURFACE, BOTTOM, CMB")
        .distance(0.0, 105.0)
        .file_name("littlep_bigP"),
    phase("pS", MIXED, "Upgoing P reflected as S at the free surface near the source")
        .waves("PSLOWNESS, FREE_SURFACE, SSLOWNESS")
        .events("BOTTOM_SIDE_REFLECTION, FREE_SURFACE, BOTTOM, CMB")
        .distance(0.0, 105.0)
        .file_name("littlep_bigS"),
    phase("pPdiff", P, "pP diffracted along the core-mantle boundary")
        .waves("PSLOWNESS")
        .events("BOTTOM_SIDE_REFLECTION, FREE_SURFACE, BOTTOM, CMB")
        .distance(90.0, 180.0),
    phase("pPKP", P, "pP continuing through the outer core")
        .waves("PSLOWNESS")
        .events("BOTTOM_SIDE_REFLECTION, FREE_SURFACE, BOTTOM, ICB")
        .distance(110.0, 180.0),
    phase("pPKPab", P, "pPKP turning in the mid outer core")
        .waves("PSLOWNESS")
        .events("BOTTOM_SIDE_REFLECTION, FREE_SURFACE, BOTTOM, ICB")
        .distance(143.0, 180.0),
    phase("pPKPbc", P, "pPKP turning in the lowermost outer core")
        .waves("PSLOWNESS")
        .events("BOTTOM_SIDE_REFLECTION, FREE_SURFACE, BOTTOM, ICB")
        .distance(143.0, 156.0),
    phase("pPKPdf", P, "pPKP through the inner core")
        .waves("PSLOWNESS")
        .events("BOTTOM_SIDE_REFLECTION, FREE_SURFACE")
        .distance(110.0, 180.0),
    phase("pPKiKP", P, "pP reflected off the inner core boundary")
        .waves("PSLOWNESS")
        .events("BOTTOM_SIDE_REFLECTION, FREE_SURFACE, TOP_SIDE_REFLECTION, ICB"),
    phase("pSKS", MIXED, "Upgoing P reflected as S at the free surface, continuing as SKS")
        .waves("PSLOWNESS, FREE_SURFACE, SSLOWNESS, CMB, PSLOWNESS, CMB, SSLOWNESS")
        .events("BOTTOM_SIDE_REFLECTION, FREE_SURFACE, BOTTOM, ICB")
        .distance(80.0, 180.0),
    phase("pSKSac", MIXED, "pSKS turning in the outer core")
        .waves("PSLOWNESS, FREE_SURFACE, SSLOWNESS, CMB, PSLOWNESS, CMB, SSLOWNESS")
        .events("BOTTOM_SIDE_REFLECTION, FREE_SURFACE, BOTTOM, ICB")
        .distance(80.0, 180.0),
    phase("pSKSdf", MIXED, "pSKS through the inner core")
        .waves("PSLOWNESS, FREE_SURFACE, SSLOWNESS, CMB, PSLOWNESS, CMB, SSLOWNESS")
        .events("BOTTOM_SIDE_REFLECTION, FREE_SURFACE")
        .distance(110.0, 180.0),
    // Crustal and upper-mantle S
    phase("Sg", S, "S wave turning in the upper crust")
        .waves("SSLOWNESS")
        .events("BOTTOM, LOWER_CRUST_TOP")
        .distance(0.0, 20.0),
    phase("Sb", S, "S wave turning in the lower crust")
        .waves("SSLOWNESS")
        .events("BOTTOM, MOHO")
        .distance(0.0, 20.0),
    phase("Sn", S, "S wave turning in the uppermost mantle")
        .waves("SSLOWNESS")
        .events("BOTTOM, M410")
        .distance(0.0, 20.0),
    phase("SmS", S, "S wave reflected off the top of the Moho")
        .waves("SSLOWNESS")
        .events("TOP_SIDE_REFLECTION, MOHO")
        .distance(0.0, 20.0),
    phase("S210S", S, "S wave reflected off the top of the 210 km discontinuity")
        .waves("SSLOWNESS")
        .events("TOP_SIDE_REFLECTION, M210")
        .distance(0.0, 40.0),
    phase("S410S", S, "S wave reflected off the top of the 410 km discontinuity")
        .waves("SSLOWNESS")
        .events("TOP_SIDE_REFLECTION, M410")
        .distance(0.0, 50.0),
    phase("S660S", S, "S wave reflected off the top of the 660 km discontinuity")
        .waves("SSLOWNESS")
        .events("TOP_SIDE_REFLECTION, M660")
        .distance(0.0, 60.0),
    phase("SnSn", S, "Sn reflected once at the free surface")
        .waves("SSLOWNESS")
        .events("BOTTOM, M410, BOTTOM_SIDE_REFLECTION, FREE_SURFACE, BOTTOM, M410")
        .distance(0.0, 40.0),
    phase("Lg", S, "Crustal guided S wave")
        .distance(0.0, 30.0),
    // Mantle and core-mantle boundary S
    phase("S", S, "S wave turning in the mantle")
        .waves("SSLOWNESS")
        .events("BOTTOM, CMB")
        .distance(0.0, 105.0),
    phase("Sdiff", S, "S wave diffracted along the core-mantle boundary")
        .waves("SSLOWNESS")
        .events("BOTTOM, CMB")
        .distance(90.0, 180.0),
    phase("Sdif", S, "S wave diffracted along the core-mantle boundary")
        .waves("SSLOWNESS")
        .events("BOTTOM, CMB")
        .distance(90.0, 180.0),
    phase("ScS", S, "S wave reflected off the core-mantle boundary")
        .waves("SSLOWNESS")
        .events("TOP_SIDE_REFLECTION, CMB")
        .distance(0.0, 95.0),
    phase("ScP", MIXED, "S wave reflected off the core-mantle boundary as P")
        .waves("SSLOWNESS, CMB, PSLOWNESS")
        .events("TOP_SIDE_REFLECTION, CMB")
        .distance(0.0, 65.0),
    phase("SS", S, "S wave reflected once at the free surface")
        .waves("SSLOWNESS")
        .events("BOTTOM, CMB, BOTTOM_SIDE_REFLECTION, FREE_SURFACE, BOTTOM, CMB")
        .distance(20.0, 180.0)
        .file_name("bigS_bigS"),
    phase("SSS", S, "S wave reflected twice at the free surface")
        .waves("SSLOWNESS")
        .events(
            "BOTTOM, CMB, BOTTOM_SIDE_REFLECTION, FREE_SURFACE, BOTTOM, CMB, \
             BOTTOM_SIDE_REFLECTION, FREE_SURFACE, BOTTOM, CMB",
        )
        .distance(30.0, 180.0),
    phase("SP", MIXED, "S wave converted to P on reflection at the free surface")
        .waves("SSLOWNESS, FREE_SURFACE, PSLOWNESS")
        .events("BOTTOM, CMB, BOTTOM_SIDE_REFLECTION, FREE_SURFACE, BOTTOM, CMB")
        .distance(20.0, 180.0)
        .file_name("bigS_bigP"),
    // Core S, converted to P in the outer core
    phase("SKS", S, "S wave converted to P through the outer core and back to S")
        .waves("SSLOWNESS, CMB, PSLOWNESS, CMB, SSLOWNESS")
        .events("BOTTOM, ICB")
        .distance(60.0, 180.0),
    phase("SKSac", S, "SKS turning in the outer core")
        .waves("SSLOWNESS, CMB, PSLOWNESS, CMB, SSLOWNESS")
        .events("BOTTOM, ICB")
        .distance(60.0, 145.0),
    phase("SKSbc", S, "SKS turning in the lowermost outer core")
        .waves("SSLOWNESS, CMB, PSLOWNESS, CMB, SSLOWNESS")
        .events("BOTTOM, ICB")
        .distance(130.0, 150.0),
    phase("SKSdf", S, "SKS through the inner core")
        .waves("SSLOWNESS, CMB, PSLOWNESS, CMB, SSLOWNESS")
        .distance(105.0, 180.0),
    phase("SKiKS", S, "S wave reflected off the inner core boundary as P in the core")
        .waves("SSLOWNESS, CMB, PSLOWNESS, CMB, SSLOWNESS")
        .events("TOP_SIDE_REFLECTION, ICB"),
    phase("SKKS", S, "SKS reflected once off the underside of the core-mantle boundary")
        .waves("SSLOWNESS, CMB, PSLOWNESS, CMB, SSLOWNESS")
        .events("BOTTOM, ICB, BOTTOM_SIDE_REFLECTION, CMB, BOTTOM, ICB")
        .distance(60.0, 180.0),
    phase("SKKSac", S, "SKKS turning in the outer core")
        .waves("SSLOWNESS, CMB, PSLOWNESS, CMB, SSLOWNESS")
        .events("BOTTOM, ICB, BOTTOM_SIDE_REFLECTION, CMB, BOTTOM, ICB")
        .distance(60.0, 180.0),
    phase("SKKSdf", S, "SKKS through the inner core")
        .waves("SSLOWNESS, CMB, PSLOWNESS, CMB, SSLOWNESS")
        .events("BOTTOM_SIDE_REFLECTION, CMB")
        .distance(100.0, 180.0),
    phase("SKSSKS", S, "SKS reflected once at the free surface")
        .waves(
            "SSLOWNESS, CMB, PSLOWNESS, CMB, SSLOWNESS, \
             CMB, PSLOWNESS, CMB, SSLOWNESS",
        )
        .events("BOTTOM, ICB, BOTTOM_SIDE_REFLECTION, FREE_SURFACE, BOTTOM, ICB")
        .distance(120.0, 180.0),
    phase("SKP", MIXED, "S wave converted to P at the core-mantle boundary")
        .waves("SSLOWNESS, CMB, PSLOWNESS")
        .events("BOTTOM, ICB")
        .distance(120.0, 180.0),
    phase("SKPab", MIXED, "SKP turning in the mid outer core")
        .waves("SSLOWNESS, CMB, PSLOWNESS")
        .events("BOTTOM, ICB")
        .distance(130.0, 180.0),
    phase("SKPbc", MIXED, "SKP turning in the lowermost outer core")
        .waves("SSLOWNESS, CMB, PSLOWNESS")
        .events("BOTTOM, ICB")
        .distance(130.0, 150.0),
    phase("SKPdf", MIXED, "SKP through the inner core")
        .waves("SSLOWNESS, CMB, PSLOWNESS")
        .distance(110.0, 180.0),
    phase("SKiKP", MIXED, "S wave reflected off the inner core boundary as P")
        .waves("SSLOWNESS, CMB, PSLOWNESS")
        .events("TOP_SIDE_REFLECTION, ICB"),
    phase("SKKP", MIXED, "SKP reflected once off the underside of the core-mantle boundary")
        .waves("SSLOWNESS, CMB, PSLOWNESS")
        .events("BOTTOM, ICB, BOTTOM_SIDE_REFLECTION, CMB, BOTTOM, ICB")
        .distance(60.0, 130.0),
    phase("SKKPab", MIXED, "SKKP turning in the mid outer core")
        .waves("SSLOWNESS, CMB, PSLOWNESS")
        .events("BOTTOM, ICB, BOTTOM_SIDE_REFLECTION, CMB, BOTTOM, ICB")
        .distance(100.0, 130.0),
    phase("SKKPbc", MIXED, "SKKP turning in the lowermost outer core")
        .waves("SSLOWNESS, CMB, PSLOWNESS")
        .events("BOTTOM, ICB, BOTTOM_SIDE_REFLECTION, CMB, BOTTOM, ICB")
        .distance(75.0, 110.0),
    phase("SKKPdf", MIXED, "SKKP through the inner core")
        .waves("SSLOWNESS, CMB, PSLOWNESS")
        .events("BOTTOM_SIDE_REFLECTION, CMB")
        .distance(60.0, 130.0),
    // Depth phases leaving the source upward as S
    phase("sS", S, "Upgoing S reflected at the free surface near the source")
        .waves("SSLOWNESS")
        .events("BOTTOM_SIDE_REFLECTION, FREE_SURFACE, BOTTOM, CMB")
        .distance(0.0, 105.0)
        .file_name("littles_bigS"),
    phase("sP", MIXED, "Upgoing S reflected as P at the free surface near the source")
        .waves("SSLOWNESS, FREE_SURFACE, PSLOWNESS")
        .events("BOTTOM_SIDE_REFLECTION, FREE_SURFACE, BOTTOM, CMB")
        .distance(0.0, 105.0)
        .file_name("littles_bigP"),
    phase("sPdiff", MIXED, "sP diffracted along the core-mantle boundary")
        .waves("SSLOWNESS, FREE_SURFACE, PSLOWNESS")
        .events("BOTTOM_SIDE_REFLECTION, FREE_SURFACE, BOTTOM, CMB")
        .distance(90.0, 180.0),
    phase("sPKP", MIXED, "sP continuing through the outer core")
        .waves("SSLOWNESS, FREE_SURFACE, PSLOWNESS")
        .events("BOTTOM_SIDE_REFLECTION, FREE_SURFACE, BOTTOM, ICB")
        .distance(110.0, 180.0),
    phase("sPKPab", MIXED, "sPKP turning in the mid outer core")
        .waves("SSLOWNESS, FREE_SURFACE, PSLOWNESS")
        .events("BOTTOM_SIDE_REFLECTION, FREE_SURFACE, BOTTOM, ICB")
        .distance(143.0, 180.0),
    phase("sPKPbc", MIXED, "sPKP turning in the lowermost outer core")
        .waves("SSLOWNESS, FREE_SURFACE, PSLOWNESS")
        .events("BOTTOM_SIDE_REFLECTION, FREE_SURFACE, BOTTOM, ICB")
        .distance(143.0, 156.0),
    phase("sPKPdf", MIXED, "sPKP through the inner core")
        .waves("SSLOWNESS, FREE_SURFACE, PSLOWNESS")
        .events("BOTTOM_SIDE_REFLECTION, FREE_SURFACE")
        .distance(110.0, 180.0),
    phase("sPKiKP", MIXED, "sP reflected off the inner core boundary")
        .waves("SSLOWNESS, FREE_SURFACE, PSLOWNESS")
        .events("BOTTOM_SIDE_REFLECTION, FREE_SURFACE, TOP_SIDE_REFLECTION, ICB"),
    phase("sSKS", S, "Upgoing S reflected at the free surface, continuing as SKS")
        .waves("SSLOWNESS, CMB, PSLOWNESS, CMB, SSLOWNESS")
        .events("BOTTOM_SIDE_REFLECTION, FREE_SURFACE, BOTTOM, ICB")
        .distance(80.0, 180.0),
    phase("sSKSac", S, "sSKS turning in the outer core")
        .waves("SSLOWNESS, CMB, PSLOWNESS, CMB, SSLOWNESS")
        .events("BOTTOM_SIDE_REFLECTION, FREE_SURFACE, BOTTOM, ICB")
        .distance(80.0, 180.0),
    phase("sSKSdf", S, "sSKS through the inner core")
        .waves("SSLOWNESS, CMB, PSLOWNESS, CMB, SSLOWNESS")
        .events("BOTTOM_SIDE_REFLECTION, FREE_SURFACE")
        .distance(110.0, 180.0),
    // Surface waves
    phase("LQ", MIXED, "Love wave"),
    phase("LR", MIXED, "Rayleigh wave"),
    // Hydroacoustic
    phase("H", MIXED, "Hydroacoustic wave recorded by a hydrophone"),
    phase("T", MIXED, "Hydroacoustic wave converted to a seismic wave at a coastline"),
    // Infrasound
    phase("I", MIXED, "Infrasound wave, unspecified path"),
    phase("Is", MIXED, "Infrasound wave ducted in the stratosphere"),
    phase("It", MIXED, "Infrasound wave ducted in the thermosphere"),
    phase("Iw", MIXED, "Infrasound wave ducted near the surface"),
    phase("LW", MIXED, "Infrasound wave, long-range ducted"),
    // Unidentified
    phase("nP", P, "Unidentified P-type arrival"),
    phase("nNL", MIXED, "Unidentified arrival, not used for location"),
];
