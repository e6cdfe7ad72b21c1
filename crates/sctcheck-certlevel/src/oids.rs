//! Certificate policy OIDs by validation level
//!
//! The EV table is the union of the Chromium and Firefox EV root metadata;
//! the OV and DV tables hold the CA/Browser Forum policies plus CA-specific
//! ones. See <https://cabforum.org/object-registry/>.

use const_oid::ObjectIdentifier;

/// Policies that mark an EV certificate
pub static EXTENDED_VALIDATION_OIDS: &[ObjectIdentifier] = &[
    // CA/Browser Forum EV OID standard
    ObjectIdentifier::new_unwrap("2.23.140.1.1"),
    // CA/Browser Forum EV Code Signing
    ObjectIdentifier::new_unwrap("2.23.140.1.3"),
    // CA/Browser Forum .onion EV Certs
    ObjectIdentifier::new_unwrap("2.23.140.1.31"),
    // AC Camerfirma S.A. Chambers of Commerce Root
    ObjectIdentifier::new_unwrap("1.3.6.1.4.1.17326.10.14.2.1.2"),
    ObjectIdentifier::new_unwrap("1.3.6.1.4.1.17326.10.14.2.2.2"),
    // AC Camerfirma S.A. Global Chambersign Root
    ObjectIdentifier::new_unwrap("1.3.6.1.4.1.17326.10.8.12.1.2"),
    ObjectIdentifier::new_unwrap("1.3.6.1.4.1.17326.10.8.12.2.2"),
    // Actalis Authentication Root CA
    ObjectIdentifier::new_unwrap("1.3.159.1.17.1"),
    // AffirmTrust Commercial
    ObjectIdentifier::new_unwrap("1.3.6.1.4.1.34697.2.1"),
    // AffirmTrust Networking
    ObjectIdentifier::new_unwrap("1.3.6.1.4.1.34697.2.2"),
    // AffirmTrust Premium
    ObjectIdentifier::new_unwrap("1.3.6.1.4.1.34697.2.3"),
    // AffirmTrust Premium ECC
    ObjectIdentifier::new_unwrap("1.3.6.1.4.1.34697.2.4"),
    // Autoridad de Certificacion Firmaprofesional CIF A62634068
    ObjectIdentifier::new_unwrap("1.3.6.1.4.1.13177.10.1.3.10"),
    // Buypass Class 3 CA 1
    ObjectIdentifier::new_unwrap("2.16.578.1.26.1.3.3"),
    // Certification Authority of WoSign
    ObjectIdentifier::new_unwrap("1.3.6.1.4.1.36305.2"),
    // CertPlus Class 2 Primary CA (KEYNECTIS)
    ObjectIdentifier::new_unwrap("1.3.6.1.4.1.22234.2.5.2.3.1"),
    // Certum Trusted Network CA
    ObjectIdentifier::new_unwrap("1.2.616.1.113527.2.5.1.1"),
    // China Internet Network Information Center EV Certificates Root
    ObjectIdentifier::new_unwrap("1.3.6.1.4.1.29836.1.10"),
    // COMODO Certification Authority
    ObjectIdentifier::new_unwrap("1.3.6.1.4.1.6449.1.2.1.5.1"),
    // Cybertrust Global Root
    ObjectIdentifier::new_unwrap("1.3.6.1.4.1.6334.1.100.1"),
    // DigiCert High Assurance EV Root CA
    ObjectIdentifier::new_unwrap("2.16.840.1.114412.2.1"),
    // D-TRUST Root Class 3 CA 2 EV 2009
    ObjectIdentifier::new_unwrap("1.3.6.1.4.1.4788.2.202.1"),
    // Entrust.net Secure Server Certification Authority
    ObjectIdentifier::new_unwrap("2.16.840.1.114028.10.1.2"),
    // E-Tugra Certification Authority
    ObjectIdentifier::new_unwrap("2.16.792.3.0.4.1.1.4"),
    // GeoTrust Primary Certification Authority
    ObjectIdentifier::new_unwrap("1.3.6.1.4.1.14370.1.6"),
    // GlobalSign Root CA
    ObjectIdentifier::new_unwrap("1.3.6.1.4.1.4146.1.1"),
    // Go Daddy Class 2 Certification Authority
    ObjectIdentifier::new_unwrap("2.16.840.1.114413.1.7.23.3"),
    // Izenpe.com
    ObjectIdentifier::new_unwrap("1.3.6.1.4.1.14777.6.1.1"),
    ObjectIdentifier::new_unwrap("1.3.6.1.4.1.14777.6.1.2"),
    // Network Solutions Certificate Authority
    ObjectIdentifier::new_unwrap("1.3.6.1.4.1.782.1.2.1.8.1"),
    // QuoVadis Root CA 2
    ObjectIdentifier::new_unwrap("1.3.6.1.4.1.8024.0.2.100.1.2"),
    // SecureTrust CA, SecureTrust Corporation
    ObjectIdentifier::new_unwrap("2.16.840.1.114404.1.1.2.4.1"),
    // Security Communication RootCA1
    ObjectIdentifier::new_unwrap("1.2.392.200091.100.721.1"),
    // Staat der Nederlanden EV Root CA
    ObjectIdentifier::new_unwrap("2.16.528.1.1003.1.2.7"),
    // StartCom Certification Authority
    ObjectIdentifier::new_unwrap("1.3.6.1.4.1.23223.1.1.1"),
    // Starfield Class 2 Certification Authority
    ObjectIdentifier::new_unwrap("2.16.840.1.114414.1.7.23.3"),
    // Starfield Services Root Certificate Authority
    ObjectIdentifier::new_unwrap("2.16.840.1.114414.1.7.24.3"),
    // SwissSign Gold CA
    ObjectIdentifier::new_unwrap("2.16.756.1.89.1.2.1.1"),
    // Swisscom Root EV CA 2
    ObjectIdentifier::new_unwrap("2.16.756.1.83.21.0"),
    // thawte Primary Root CA
    ObjectIdentifier::new_unwrap("2.16.840.1.113733.1.7.48.1"),
    // TWCA Global Root CA
    ObjectIdentifier::new_unwrap("1.3.6.1.4.1.40869.1.1.22.3"),
    // T-TeleSec GlobalRoot Class 3
    ObjectIdentifier::new_unwrap("1.3.6.1.4.1.7879.13.24.1"),
    // VeriSign Class 3 Public Primary Certification Authority
    ObjectIdentifier::new_unwrap("2.16.840.1.113733.1.7.23.6"),
    // Wells Fargo WellsSecure Public Root Certificate Authority
    ObjectIdentifier::new_unwrap("2.16.840.1.114171.500.9"),
    // CFCA EV ROOT
    ObjectIdentifier::new_unwrap("2.16.156.112554.3"),
    // OISTE WISeKey Global Root GB CA
    ObjectIdentifier::new_unwrap("2.16.756.5.14.7.4.8"),
    // TÜRKTRUST Elektronik Sertifika Hizmet Sağlayıcısı H6
    ObjectIdentifier::new_unwrap("2.16.792.3.0.3.1.1.5"),
];

/// Policies that mark an OV certificate
pub static ORGANIZATION_VALIDATION_OIDS: &[ObjectIdentifier] = &[
    // CA/Browser Forum OV OID standard
    ObjectIdentifier::new_unwrap("2.23.140.1.2.2"),
    // CA/Browser Forum individually validated
    ObjectIdentifier::new_unwrap("2.23.140.1.2.3"),
    // Digicert
    ObjectIdentifier::new_unwrap("2.16.840.1.114412.1.1"),
    // D-Trust
    ObjectIdentifier::new_unwrap("1.3.6.1.4.1.4788.2.200.1"),
    // GoDaddy
    ObjectIdentifier::new_unwrap("2.16.840.1.114413.1.7.23.2"),
    // Logius
    ObjectIdentifier::new_unwrap("2.16.528.1.1003.1.2.5.6"),
    // QuoVadis
    ObjectIdentifier::new_unwrap("1.3.6.1.4.1.8024.0.2.100.1.1"),
    // Starfield
    ObjectIdentifier::new_unwrap("2.16.840.1.114414.1.7.23.2"),
    // TurkTrust
    ObjectIdentifier::new_unwrap("2.16.792.3.0.3.1.1.2"),
];

/// Policies that mark a DV certificate
pub static DOMAIN_VALIDATION_OIDS: &[ObjectIdentifier] = &[
    // Globalsign
    ObjectIdentifier::new_unwrap("1.3.6.1.4.1.4146.1.10.10"),
    // Let's Encrypt
    ObjectIdentifier::new_unwrap("1.3.6.1.4.1.44947.1.1.1"),
    // Comodo (eNom)
    ObjectIdentifier::new_unwrap("1.3.6.1.4.1.6449.1.2.2.10"),
    // Comodo (WoTrust)
    ObjectIdentifier::new_unwrap("1.3.6.1.4.1.6449.1.2.2.15"),
    // Comodo (RBC SOFT)
    ObjectIdentifier::new_unwrap("1.3.6.1.4.1.6449.1.2.2.16"),
    // Comodo (RegisterFly)
    ObjectIdentifier::new_unwrap("1.3.6.1.4.1.6449.1.2.2.17"),
    // Comodo (Central Security Patrols)
    ObjectIdentifier::new_unwrap("1.3.6.1.4.1.6449.1.2.2.18"),
    // Comodo (eBiz Networks)
    ObjectIdentifier::new_unwrap("1.3.6.1.4.1.6449.1.2.2.19"),
    // Comodo (OptimumSSL)
    ObjectIdentifier::new_unwrap("1.3.6.1.4.1.6449.1.2.2.21"),
    // Comodo (WoSign)
    ObjectIdentifier::new_unwrap("1.3.6.1.4.1.6449.1.2.2.22"),
    // Comodo (Register.com)
    ObjectIdentifier::new_unwrap("1.3.6.1.4.1.6449.1.2.2.24"),
    // Comodo (The Code Project)
    ObjectIdentifier::new_unwrap("1.3.6.1.4.1.6449.1.2.2.25"),
    // Comodo (Gandi)
    ObjectIdentifier::new_unwrap("1.3.6.1.4.1.6449.1.2.2.26"),
    // Comodo (GlobeSSL)
    ObjectIdentifier::new_unwrap("1.3.6.1.4.1.6449.1.2.2.27"),
    // Comodo (DreamHost)
    ObjectIdentifier::new_unwrap("1.3.6.1.4.1.6449.1.2.2.28"),
    // Comodo (TERENA)
    ObjectIdentifier::new_unwrap("1.3.6.1.4.1.6449.1.2.2.29"),
    // Comodo (GlobalSSL)
    ObjectIdentifier::new_unwrap("1.3.6.1.4.1.6449.1.2.2.31"),
    // Comodo (IceWarp)
    ObjectIdentifier::new_unwrap("1.3.6.1.4.1.6449.1.2.2.35"),
    // Comodo (Dotname Korea)
    ObjectIdentifier::new_unwrap("1.3.6.1.4.1.6449.1.2.2.37"),
    // Comodo (TrustSign)
    ObjectIdentifier::new_unwrap("1.3.6.1.4.1.6449.1.2.2.38"),
    // Comodo (Formidable)
    ObjectIdentifier::new_unwrap("1.3.6.1.4.1.6449.1.2.2.39"),
    // Comodo (SSL Blindado)
    ObjectIdentifier::new_unwrap("1.3.6.1.4.1.6449.1.2.2.40"),
    // Comodo (Dreamscape Networks)
    ObjectIdentifier::new_unwrap("1.3.6.1.4.1.6449.1.2.2.41"),
    // Comodo (K Software)
    ObjectIdentifier::new_unwrap("1.3.6.1.4.1.6449.1.2.2.42"),
    // Comodo (FBS)
    ObjectIdentifier::new_unwrap("1.3.6.1.4.1.6449.1.2.2.44"),
    // Comodo (ReliaSite)
    ObjectIdentifier::new_unwrap("1.3.6.1.4.1.6449.1.2.2.45"),
    // Comodo (CertAssure)
    ObjectIdentifier::new_unwrap("1.3.6.1.4.1.6449.1.2.2.47"),
    // Comodo (TrustAsia)
    ObjectIdentifier::new_unwrap("1.3.6.1.4.1.6449.1.2.2.49"),
    // Comodo (SecureCore)
    ObjectIdentifier::new_unwrap("1.3.6.1.4.1.6449.1.2.2.50"),
    // Comodo (Western Digital)
    ObjectIdentifier::new_unwrap("1.3.6.1.4.1.6449.1.2.2.51"),
    // Comodo (cPanel)
    ObjectIdentifier::new_unwrap("1.3.6.1.4.1.6449.1.2.2.52"),
    // Comodo (BlackCert)
    ObjectIdentifier::new_unwrap("1.3.6.1.4.1.6449.1.2.2.53"),
    // Comodo (KeyNet Systems)
    ObjectIdentifier::new_unwrap("1.3.6.1.4.1.6449.1.2.2.54"),
    // Comodo
    ObjectIdentifier::new_unwrap("1.3.6.1.4.1.6449.1.2.2.7"),
    // Comodo (CSC)
    ObjectIdentifier::new_unwrap("1.3.6.1.4.1.6449.1.2.2.8"),
    // Digicert
    ObjectIdentifier::new_unwrap("2.16.840.1.114412.1.2"),
    // GoDaddy
    ObjectIdentifier::new_unwrap("2.16.840.1.114413.1.7.23.1"),
    // Starfield
    ObjectIdentifier::new_unwrap("2.16.840.1.114414.1.7.23.1"),
    // CA/B Forum
    ObjectIdentifier::new_unwrap("2.23.140.1.2.1"),
];
