//! The compiled media type table.
//!
//! One record per media type, byte-wise ordered by canonical name
//! (`application/*` first). The table mirrors the IANA media types
//! registry plus a number of historically used unregistered types, and is
//! never mutated; all lookups hand out shared references into it.

use crate::media_type::MediaType;

#[rustfmt::skip]
pub(crate) static MEDIA_TYPES: &[MediaType] = &[
    MediaType::new("application/1d-interleaved-parityfec", "", &[], true),
    MediaType::new("application/3gpdash-qoe-report+xml", "text/xml", &[], true),
    MediaType::new("application/3gpp-ims+xml", "text/xml", &[], true),
    MediaType::new("application/3gppHal+json", "application/json", &[], true),
    MediaType::new("application/3gppHalForms+json", "application/json", &[], true),
    MediaType::new("application/A2L", "", &[], true),
    MediaType::new("application/AML", "", &[], true),
    MediaType::new("application/ATF", "", &[], true),
    MediaType::new("application/ATFX", "", &[], true),
    MediaType::new("application/ATXML", "", &[], true),
    MediaType::new("application/CALS-1840", "", &[], true),
    MediaType::new("application/CDFX+XML", "text/xml", &[], true),
    MediaType::new("application/CEA", "", &[], true),
    MediaType::new("application/CSTAdata+xml", "text/xml", &[], true),
    MediaType::new("application/DCD", "", &[], true),
    MediaType::new("application/DII", "", &[], true),
    MediaType::new("application/DIT", "", &[], true),
    MediaType::new("application/EDI-X12", "", &[], true),
    MediaType::new("application/EDI-consent", "", &[], true),
    MediaType::new("application/EDIFACT", "", &[], true),
    MediaType::new("application/EmergencyCallData.Comment+xml", "text/xml", &[], true),
    MediaType::new("application/EmergencyCallData.Control+xml", "text/xml", &[], true),
    MediaType::new("application/EmergencyCallData.DeviceInfo+xml", "text/xml", &[], true),
    MediaType::new("application/EmergencyCallData.LegacyESN+json", "application/json", &[], true),
    MediaType::new("application/EmergencyCallData.ProviderInfo+xml", "text/xml", &[], true),
    MediaType::new("application/EmergencyCallData.ServiceInfo+xml", "text/xml", &[], true),
    MediaType::new("application/EmergencyCallData.SubscriberInfo+xml", "text/xml", &[], true),
    MediaType::new("application/EmergencyCallData.VEDS+xml", "text/xml", &[], true),
    MediaType::new("application/EmergencyCallData.cap+xml", "text/xml", &[], true),
    MediaType::new("application/EmergencyCallData.eCall.MSD", "", &[], true),
    MediaType::new("application/IOTP", "", &[], true),
    MediaType::new("application/LXF", "", &[], true),
    MediaType::new("application/MF4", "", &[], true),
    MediaType::new("application/ODA", "", &[], true),
    MediaType::new("application/ODX", "", &[], true),
    MediaType::new("application/PDX", "", &[], true),
    MediaType::new("application/TETRA_ISI", "", &[], true),
    MediaType::new("application/acad", "", &["dwg"], false),
    MediaType::new("application/ace+cbor", "application/cbor", &[], true),
    MediaType::new("application/ace+json", "application/json", &[], true),
    MediaType::new("application/activemessage", "", &[], true),
    MediaType::new("application/activity+json", "application/json", &[], true),
    MediaType::new("application/aif+cbor", "application/cbor", &[], true),
    MediaType::new("application/aif+json", "application/json", &[], true),
    MediaType::new("application/alto-cdni+json", "application/json", &[], true),
    MediaType::new("application/alto-cdnifilter+json", "application/json", &[], true),
    MediaType::new("application/alto-costmap+json", "application/json", &[], true),
    MediaType::new("application/alto-costmapfilter+json", "application/json", &[], true),
    MediaType::new("application/alto-directory+json", "application/json", &[], true),
    MediaType::new("application/alto-endpointcost+json", "application/json", &[], true),
    MediaType::new("application/alto-endpointcostparams+json", "application/json", &[], true),
    MediaType::new("application/alto-endpointprop+json", "application/json", &[], true),
    MediaType::new("application/alto-endpointpropparams+json", "application/json", &[], true),
    MediaType::new("application/alto-error+json", "application/json", &[], true),
    MediaType::new("application/alto-networkmap+json", "application/json", &[], true),
    MediaType::new("application/alto-networkmapfilter+json", "application/json", &[], true),
    MediaType::new("application/alto-propmap+json", "application/json", &[], true),
    MediaType::new("application/alto-propmapparams+json", "application/json", &[], true),
    MediaType::new("application/alto-updatestreamcontrol+json", "application/json", &[], true),
    MediaType::new("application/alto-updatestreamparams+json", "application/json", &[], true),
    MediaType::new("application/andrew-inset", "", &["ez"], true),
    MediaType::new("application/applefile", "", &[], true),
    MediaType::new("application/applixware", "", &["aw"], false),
    MediaType::new("application/arj", "", &["arj"], false),
    MediaType::new("application/at+jwt", "application/jwt", &[], true),
    MediaType::new("application/atom+xml", "text/xml", &["atom", "xml"], true),
    MediaType::new("application/atomcat+xml", "text/xml", &["atomcat"], true),
    MediaType::new("application/atomdeleted+xml", "text/xml", &[], true),
    MediaType::new("application/atomicmail", "", &[], true),
    MediaType::new("application/atomsvc+xml", "text/xml", &["atomsvc"], true),
    MediaType::new("application/atsc-dwd+xml", "text/xml", &[], true),
    MediaType::new("application/atsc-dynamic-event-message", "", &[], true),
    MediaType::new("application/atsc-held+xml", "text/xml", &[], true),
    MediaType::new("application/atsc-rdt+json", "application/json", &[], true),
    MediaType::new("application/atsc-rsat+xml", "text/xml", &[], true),
    MediaType::new("application/auth-policy+xml", "text/xml", &[], true),
    MediaType::new("application/automationml-aml+xml", "text/xml", &[], true),
    MediaType::new("application/automationml-amlx+zip", "application/zip", &[], true),
    MediaType::new("application/bacnet-xdd+zip", "application/zip", &[], true),
    MediaType::new("application/base64", "", &["mm", "mme"], false),
    MediaType::new("application/batch-SMTP", "", &[], true),
    MediaType::new("application/beep+xml", "text/xml", &[], true),
    MediaType::new("application/binhex", "", &["hqx"], false),
    MediaType::new("application/binhex4", "", &["hqx"], false),
    MediaType::new("application/book", "", &["boo", "book"], false),
    MediaType::new("application/calendar+json", "application/json", &[], true),
    MediaType::new("application/calendar+xml", "text/xml", &[], true),
    MediaType::new("application/call-completion", "", &[], true),
    MediaType::new("application/captive+json", "application/json", &[], true),
    MediaType::new("application/cbor", "", &[], true),
    MediaType::new("application/cbor-seq", "", &[], true),
    MediaType::new("application/cccex", "", &[], true),
    MediaType::new("application/ccmp+xml", "text/xml", &[], true),
    MediaType::new("application/ccxml+xml", "text/xml", &["ccxml"], true),
    MediaType::new("application/cda+xml", "text/xml", &[], true),
    MediaType::new("application/cdf", "", &["cdf"], false),
    MediaType::new("application/cdmi-capability", "", &["cdmia"], true),
    MediaType::new("application/cdmi-container", "", &["cdmic"], true),
    MediaType::new("application/cdmi-domain", "", &["cdmid"], true),
    MediaType::new("application/cdmi-object", "", &["cdmio"], true),
    MediaType::new("application/cdmi-queue", "", &["cdmiq"], true),
    MediaType::new("application/cdni", "", &[], true),
    MediaType::new("application/cea-2018+xml", "text/xml", &[], true),
    MediaType::new("application/cellml+xml", "text/xml", &[], true),
    MediaType::new("application/cfw", "", &[], true),
    MediaType::new("application/city+json", "application/json", &[], true),
    MediaType::new("application/clariscad", "", &["ccad"], false),
    MediaType::new("application/clr", "", &[], true),
    MediaType::new("application/clue+xml", "text/xml", &[], true),
    MediaType::new("application/clue_info+xml", "text/xml", &[], true),
    MediaType::new("application/cms", "", &[], true),
    MediaType::new("application/cnrp+xml", "text/xml", &[], true),
    MediaType::new("application/coap-group+json", "application/json", &[], true),
    MediaType::new("application/coap-payload", "", &[], true),
    MediaType::new("application/commonground", "", &["dp"], true),
    MediaType::new("application/concise-problem-details+cbor", "application/cbor", &[], true),
    MediaType::new("application/conference-info+xml", "text/xml", &[], true),
    MediaType::new("application/cose", "", &[], true),
    MediaType::new("application/cose-key", "", &[], true),
    MediaType::new("application/cose-key-set", "", &[], true),
    MediaType::new("application/cose-x509", "", &[], true),
    MediaType::new("application/cpl+xml", "text/xml", &[], true),
    MediaType::new("application/csrattrs", "", &[], true),
    MediaType::new("application/csta+xml", "text/xml", &[], true),
    MediaType::new("application/csvm+json", "application/json", &[], true),
    MediaType::new("application/cu-seeme", "", &["cu", "csm"], false),
    MediaType::new("application/cwl", "", &[], true),
    MediaType::new("application/cwl+json", "application/json", &[], true),
    MediaType::new("application/cwt", "", &[], true),
    MediaType::new("application/cybercash", "", &[], true),
    MediaType::new("application/dash+xml", "text/xml", &[], true),
    MediaType::new("application/dash-patch+xml", "text/xml", &[], true),
    MediaType::new("application/dashdelta", "", &[], true),
    MediaType::new("application/davmount+xml", "text/xml", &["davmount"], true),
    MediaType::new("application/dca-rft", "", &[], true),
    MediaType::new("application/dec-dx", "", &[], true),
    MediaType::new("application/dialog-info+xml", "text/xml", &[], true),
    MediaType::new("application/dicom", "", &[], true),
    MediaType::new("application/dicom+json", "application/json", &[], true),
    MediaType::new("application/dicom+xml", "text/xml", &[], true),
    MediaType::new("application/dns", "", &[], true),
    MediaType::new("application/dns+json", "application/json", &[], true),
    MediaType::new("application/dns-message", "", &[], true),
    MediaType::new("application/docbook+xml", "text/xml", &["dbk"], false),
    MediaType::new("application/dots+cbor", "application/cbor", &[], true),
    MediaType::new("application/drafting", "", &["drw"], false),
    MediaType::new("application/dskpp+xml", "text/xml", &[], true),
    MediaType::new("application/dsptype", "", &["tsp"], false),
    MediaType::new("application/dssc+der", "", &["dssc"], true),
    MediaType::new("application/dssc+xml", "text/xml", &["xdssc"], true),
    MediaType::new("application/dvcs", "", &[], true),
    MediaType::new("application/dxf", "", &["dxf"], false),
    MediaType::new("application/ecmascript", "", &["es", "ecma", "js"], true),
    MediaType::new("application/efi", "", &[], true),
    MediaType::new("application/elm+json", "application/json", &[], true),
    MediaType::new("application/elm+xml", "text/xml", &[], true),
    MediaType::new("application/emma+xml", "text/xml", &["emma"], true),
    MediaType::new("application/emotionml+xml", "text/xml", &[], true),
    MediaType::new("application/encaprtp", "", &[], true),
    MediaType::new("application/envoy", "", &["evy"], false),
    MediaType::new("application/epp+xml", "text/xml", &[], true),
    MediaType::new("application/epub+zip", "application/zip", &["epub"], true),
    MediaType::new("application/eshop", "", &[], true),
    MediaType::new("application/example", "", &[], true),
    MediaType::new("application/excel", "", &["xl", "xla", "xlb", "xlc", "xld", "xlk", "xll", "xlm", "xls", "xlt", "xlv", "xlw"], false),
    MediaType::new("application/exi", "", &["exi"], true),
    MediaType::new("application/expect-ct-report+json", "application/json", &[], true),
    MediaType::new("application/express", "", &[], true),
    MediaType::new("application/fastinfoset", "", &[], true),
    MediaType::new("application/fastsoap", "", &[], true),
    MediaType::new("application/fdf", "", &[], true),
    MediaType::new("application/fdt+xml", "text/xml", &[], true),
    MediaType::new("application/fhir+json", "application/json", &[], true),
    MediaType::new("application/fhir+xml", "text/xml", &[], true),
    MediaType::new("application/fits", "", &[], true),
    MediaType::new("application/flexfec", "", &[], true),
    MediaType::new("application/font-sfnt", "", &[], true),
    MediaType::new("application/font-tdpfr", "", &["pfr"], true),
    MediaType::new("application/font-woff", "", &["woff"], true),
    MediaType::new("application/fractals", "", &["fif"], false),
    MediaType::new("application/framework-attributes+xml", "text/xml", &[], true),
    MediaType::new("application/freeloader", "", &["frl"], false),
    MediaType::new("application/futuresplash", "", &["spl"], false),
    MediaType::new("application/geo+json", "application/json", &[], true),
    MediaType::new("application/geo+json-seq", "", &[], true),
    MediaType::new("application/geopackage+sqlite3", "application/vnd.sqlite3", &[], true),
    MediaType::new("application/geoxacml+xml", "text/xml", &[], true),
    MediaType::new("application/ghostview", "", &[], false),
    MediaType::new("application/gltf-buffer", "", &[], true),
    MediaType::new("application/gml+xml", "text/xml", &["gml"], true),
    MediaType::new("application/gnutar", "", &["tgz"], false),
    MediaType::new("application/gpx+xml", "text/xml", &["gpx"], false),
    MediaType::new("application/groupwise", "", &["vew"], false),
    MediaType::new("application/gxf", "", &["gxf"], false),
    MediaType::new("application/gzip", "", &[], true),
    MediaType::new("application/h224", "", &[], false),
    MediaType::new("application/held+xml", "text/xml", &[], true),
    MediaType::new("application/hl7v2+xml", "text/xml", &[], true),
    MediaType::new("application/hlp", "", &["hlp"], false),
    MediaType::new("application/hta", "", &["hta"], false),
    MediaType::new("application/http", "", &[], true),
    MediaType::new("application/hyperstudio", "", &["stk"], true),
    MediaType::new("application/i-deas", "", &["unv"], false),
    MediaType::new("application/ibe-key-request+xml", "text/xml", &[], true),
    MediaType::new("application/ibe-pkg-reply+xml", "text/xml", &[], true),
    MediaType::new("application/ibe-pp-data", "", &[], true),
    MediaType::new("application/iges", "", &["iges", "igs"], true),
    MediaType::new("application/im-iscomposing+xml", "text/xml", &[], true),
    MediaType::new("application/index", "", &[], true),
    MediaType::new("application/index.cmd", "", &[], true),
    MediaType::new("application/index.obj", "", &[], true),
    MediaType::new("application/index.response", "", &[], true),
    MediaType::new("application/index.vnd", "", &[], true),
    MediaType::new("application/inf", "", &["inf"], false),
    MediaType::new("application/inkml+xml", "text/xml", &["ink", "inkml"], true),
    MediaType::new("application/internet-property-stream", "", &["acx"], false),
    MediaType::new("application/ipfix", "", &["ipfix"], true),
    MediaType::new("application/ipp", "", &[], true),
    MediaType::new("application/isup", "", &[], false),
    MediaType::new("application/its+xml", "text/xml", &[], true),
    MediaType::new("application/java", "", &["class"], false),
    MediaType::new("application/java-archive", "", &["jar"], false),
    MediaType::new("application/java-byte-code", "", &["class"], false),
    MediaType::new("application/java-serialized-object", "", &["ser"], false),
    MediaType::new("application/java-vm", "", &["class"], false),
    MediaType::new("application/javascript", "", &["js"], true),
    MediaType::new("application/jf2feed+json", "application/json", &[], true),
    MediaType::new("application/jose", "", &[], true),
    MediaType::new("application/jose+json", "application/json", &[], true),
    MediaType::new("application/jrd+json", "application/json", &[], true),
    MediaType::new("application/jscalendar+json", "application/json", &[], true),
    MediaType::new("application/json", "", &["json"], true),
    MediaType::new("application/json-patch+json", "application/json", &[], true),
    MediaType::new("application/json-seq", "", &[], true),
    MediaType::new("application/jsonml+json", "application/json", &["jsonml"], false),
    MediaType::new("application/jwk+json", "application/json", &[], true),
    MediaType::new("application/jwk-set+json", "application/json", &[], true),
    MediaType::new("application/jwt", "", &[], true),
    MediaType::new("application/kpml-request+xml", "text/xml", &[], true),
    MediaType::new("application/kpml-response+xml", "text/xml", &[], true),
    MediaType::new("application/ld+json", "application/json", &[], true),
    MediaType::new("application/lgr+xml", "text/xml", &[], true),
    MediaType::new("application/lha", "", &["lha"], false),
    MediaType::new("application/link-format", "", &[], true),
    MediaType::new("application/linkset", "", &[], true),
    MediaType::new("application/linkset+json", "application/json", &[], true),
    MediaType::new("application/load-control+xml", "text/xml", &[], true),
    MediaType::new("application/logout+jwt", "application/jwt", &[], true),
    MediaType::new("application/lost+xml", "text/xml", &["lostxml"], true),
    MediaType::new("application/lostsync+xml", "text/xml", &[], true),
    MediaType::new("application/lpf+zip", "application/zip", &[], true),
    MediaType::new("application/lzx", "", &["lzx"], false),
    MediaType::new("application/mac-binary", "", &["bin"], false),
    MediaType::new("application/mac-binhex", "", &["hqx"], false),
    MediaType::new("application/mac-binhex40", "", &["hqx"], true),
    MediaType::new("application/mac-compactpro", "", &["cpt"], false),
    MediaType::new("application/macbinary", "", &["bin"], false),
    MediaType::new("application/macwriteii", "", &[], true),
    MediaType::new("application/mads+xml", "text/xml", &["mads"], true),
    MediaType::new("application/manifest+json", "application/json", &[], true),
    MediaType::new("application/marc", "", &["mrc"], true),
    MediaType::new("application/marcxml+xml", "text/xml", &["mrcx"], true),
    MediaType::new("application/mathematica", "", &["ma", "nb", "mb"], true),
    MediaType::new("application/mathematica-old", "", &[], false),
    MediaType::new("application/mathml+xml", "text/xml", &["mathml"], true),
    MediaType::new("application/mathml-content+xml", "text/xml", &[], true),
    MediaType::new("application/mathml-presentation+xml", "text/xml", &[], true),
    MediaType::new("application/mbedlet", "", &["mbd"], false),
    MediaType::new("application/mbms-associated-procedure-description+xml", "text/xml", &[], true),
    MediaType::new("application/mbms-deregister+xml", "text/xml", &[], true),
    MediaType::new("application/mbms-envelope+xml", "text/xml", &[], true),
    MediaType::new("application/mbms-msk+xml", "text/xml", &[], true),
    MediaType::new("application/mbms-msk-response+xml", "text/xml", &[], true),
    MediaType::new("application/mbms-protection-description+xml", "text/xml", &[], true),
    MediaType::new("application/mbms-reception-report+xml", "text/xml", &[], true),
    MediaType::new("application/mbms-register+xml", "text/xml", &[], true),
    MediaType::new("application/mbms-register-response+xml", "text/xml", &[], true),
    MediaType::new("application/mbms-schedule+xml", "text/xml", &[], true),
    MediaType::new("application/mbms-user-service-description+xml", "text/xml", &[], true),
    MediaType::new("application/mbox", "", &["mbox"], true),
    MediaType::new("application/mcad", "", &["mcd"], false),
    MediaType::new("application/media-policy-dataset+xml", "text/xml", &[], true),
    MediaType::new("application/media_control+xml", "text/xml", &[], true),
    MediaType::new("application/mediaservercontrol+xml", "text/xml", &["mscml"], true),
    MediaType::new("application/merge-patch+json", "application/json", &[], true),
    MediaType::new("application/metalink+xml", "text/xml", &["metalink"], false),
    MediaType::new("application/metalink4+xml", "text/xml", &["meta4"], true),
    MediaType::new("application/mets+xml", "text/xml", &["mets"], true),
    MediaType::new("application/mikey", "", &[], true),
    MediaType::new("application/mime", "", &["aps"], false),
    MediaType::new("application/mipc", "", &[], true),
    MediaType::new("application/missing-blocks+cbor-seq", "", &[], true),
    MediaType::new("application/mmt-aei+xml", "text/xml", &[], true),
    MediaType::new("application/mmt-usd+xml", "text/xml", &[], true),
    MediaType::new("application/mods+xml", "text/xml", &["mods"], true),
    MediaType::new("application/moss-keys", "", &[], true),
    MediaType::new("application/moss-signature", "", &[], true),
    MediaType::new("application/mosskey-data", "", &[], true),
    MediaType::new("application/mosskey-request", "", &[], true),
    MediaType::new("application/mp21", "", &["m21", "mp21"], true),
    MediaType::new("application/mp4", "", &["mp4", "m4p", "mp4s"], true),
    MediaType::new("application/mpeg4-generic", "", &[], true),
    MediaType::new("application/mpeg4-iod", "", &[], true),
    MediaType::new("application/mpeg4-iod-xmt", "", &[], true),
    MediaType::new("application/mrb-consumer+xml", "text/xml", &[], true),
    MediaType::new("application/mrb-publish+xml", "text/xml", &[], true),
    MediaType::new("application/msaccess", "", &["mdb"], false),
    MediaType::new("application/msc-ivr+xml", "text/xml", &[], true),
    MediaType::new("application/msc-mixer+xml", "text/xml", &[], true),
    MediaType::new("application/msonenote", "", &["one", "onetoc2", "onetmp", "onepkg"], false),
    MediaType::new("application/mspowerpoint", "", &["pot", "pps", "ppt", "ppz"], false),
    MediaType::new("application/msword", "", &["doc", "dot", "w6w", "wiz", "word"], true),
    MediaType::new("application/mswrite", "", &["wri"], false),
    MediaType::new("application/mud+json", "application/json", &[], true),
    MediaType::new("application/multipart-core", "", &[], true),
    MediaType::new("application/mxf", "", &["mxf"], true),
    MediaType::new("application/n-quads", "", &[], true),
    MediaType::new("application/n-triples", "", &[], true),
    MediaType::new("application/nasdata", "", &[], true),
    MediaType::new("application/netmc", "", &["mcp"], false),
    MediaType::new("application/news-checkgroups", "", &[], true),
    MediaType::new("application/news-groupinfo", "", &[], true),
    MediaType::new("application/news-message-id", "", &[], false),
    MediaType::new("application/news-transmission", "", &[], true),
    MediaType::new("application/nlsml+xml", "text/xml", &[], true),
    MediaType::new("application/node", "", &[], true),
    MediaType::new("application/nss", "", &[], true),
    MediaType::new("application/oauth-authz-req+jwt", "application/jwt", &[], true),
    MediaType::new("application/oblivious-dns-message", "", &[], true),
    MediaType::new("application/ocsp-request", "", &[], true),
    MediaType::new("application/ocsp-response", "", &[], true),
    MediaType::new("application/octet-stream", "", &["bin", "dms", "lrf", "mar", "so", "dist", "distz", "pkg", "bpk", "dump", "elc", "a", "arc", "arj", "com", "exe", "lha", "lhx", "lzh", "lzx", "o", "psd", "saveme", "uu", "zoo", "class", "buffer", "deploy", "hqx", "obj", "lib", "zip", "gz", "dmg", "iso"], true),
    MediaType::new("application/odm+xml", "text/xml", &[], true),
    MediaType::new("application/oebps-package+xml", "text/xml", &["opf"], true),
    MediaType::new("application/ogg", "", &["ogx", "ogg"], true),
    MediaType::new("application/olescript", "", &["axs"], false),
    MediaType::new("application/omdoc+xml", "text/xml", &["omdoc"], false),
    MediaType::new("application/onenote", "", &["onetoc", "onetoc2", "onetmp", "onepkg"], false),
    MediaType::new("application/opc-nodeset+xml", "text/xml", &[], true),
    MediaType::new("application/oscore", "", &[], true),
    MediaType::new("application/oxps", "", &["oxps"], true),
    MediaType::new("application/p21", "", &[], true),
    MediaType::new("application/p21+zip", "application/zip", &[], true),
    MediaType::new("application/p2p-overlay+xml", "text/xml", &[], true),
    MediaType::new("application/parityfec", "", &[], true),
    MediaType::new("application/passport", "", &[], true),
    MediaType::new("application/patch-ops-error+xml", "text/xml", &["xer"], true),
    MediaType::new("application/pdf", "", &["pdf"], true),
    MediaType::new("application/pem-certificate-chain", "", &[], true),
    MediaType::new("application/pgp-encrypted", "", &["pgp"], true),
    MediaType::new("application/pgp-keys", "", &["key"], true),
    MediaType::new("application/pgp-signature", "", &["asc", "pgp", "sig"], true),
    MediaType::new("application/pics-rules", "", &["prf"], false),
    MediaType::new("application/pidf+xml", "text/xml", &[], true),
    MediaType::new("application/pidf-diff+xml", "text/xml", &[], true),
    MediaType::new("application/pkcs-12", "", &["p12"], false),
    MediaType::new("application/pkcs-crl", "", &["crl"], false),
    MediaType::new("application/pkcs10", "", &["p10"], true),
    MediaType::new("application/pkcs12", "", &[], true),
    MediaType::new("application/pkcs7-mime", "", &["p7m", "p7c"], true),
    MediaType::new("application/pkcs7-signature", "", &["p7s"], true),
    MediaType::new("application/pkcs8", "", &["p8"], true),
    MediaType::new("application/pkcs8-encrypted", "", &[], true),
    MediaType::new("application/pkix-attr-cert", "", &["ac"], true),
    MediaType::new("application/pkix-cert", "", &["cer", "crt"], true),
    MediaType::new("application/pkix-crl", "", &["crl"], true),
    MediaType::new("application/pkix-pkipath", "", &["pkipath"], true),
    MediaType::new("application/pkixcmp", "", &["pki"], true),
    MediaType::new("application/plain", "", &["text"], false),
    MediaType::new("application/pls+xml", "text/xml", &["pls"], true),
    MediaType::new("application/poc-settings+xml", "text/xml", &[], true),
    MediaType::new("application/postscript", "", &["ai", "eps", "ps"], true),
    MediaType::new("application/powerpoint", "", &["ppt"], false),
    MediaType::new("application/ppsp-tracker+json", "application/json", &[], true),
    MediaType::new("application/pro_eng", "", &["part", "prt"], false),
    MediaType::new("application/problem+json", "application/json", &[], true),
    MediaType::new("application/problem+xml", "text/xml", &[], true),
    MediaType::new("application/provenance+xml", "text/xml", &[], true),
    MediaType::new("application/prs.alvestrand.titrax-sheet", "", &[], true),
    MediaType::new("application/prs.cww", "", &["cww"], true),
    MediaType::new("application/prs.cyn", "", &[], true),
    MediaType::new("application/prs.hpub+zip", "application/zip", &[], true),
    MediaType::new("application/prs.nprend", "", &[], true),
    MediaType::new("application/prs.plucker", "", &[], true),
    MediaType::new("application/prs.rdf-xml-crypt", "", &[], true),
    MediaType::new("application/prs.xsf+xml", "text/xml", &[], true),
    MediaType::new("application/pskc+xml", "text/xml", &["pskcxml"], true),
    MediaType::new("application/pvd+json", "application/json", &[], true),
    MediaType::new("application/qsig", "", &[], false),
    MediaType::new("application/raptorfec", "", &[], true),
    MediaType::new("application/rar", "", &["rar"], false),
    MediaType::new("application/rdap+json", "application/json", &[], true),
    MediaType::new("application/rdf+xml", "text/xml", &["rdf"], true),
    MediaType::new("application/reginfo+xml", "text/xml", &["rif"], true),
    MediaType::new("application/relax-ng-compact-syntax", "", &["rnc"], true),
    MediaType::new("application/remote-printing", "", &[], true),
    MediaType::new("application/reputon+json", "application/json", &[], true),
    MediaType::new("application/resource-lists+xml", "text/xml", &["rl"], true),
    MediaType::new("application/resource-lists-diff+xml", "text/xml", &["rld"], true),
    MediaType::new("application/rfc+xml", "text/xml", &[], true),
    MediaType::new("application/ringing-tones", "", &["rng"], false),
    MediaType::new("application/riscos", "", &[], true),
    MediaType::new("application/rlmi+xml", "text/xml", &[], true),
    MediaType::new("application/rls-services+xml", "text/xml", &["rs"], true),
    MediaType::new("application/route-apd+xml", "text/xml", &[], true),
    MediaType::new("application/route-s-tsid+xml", "text/xml", &[], true),
    MediaType::new("application/route-usd+xml", "text/xml", &[], true),
    MediaType::new("application/rpki-checklist", "", &[], true),
    MediaType::new("application/rpki-ghostbusters", "", &["gbr"], true),
    MediaType::new("application/rpki-manifest", "", &["mft"], true),
    MediaType::new("application/rpki-publication", "", &[], true),
    MediaType::new("application/rpki-roa", "", &["roa"], true),
    MediaType::new("application/rpki-updown", "", &[], true),
    MediaType::new("application/rsd+xml", "text/xml", &["rsd"], false),
    MediaType::new("application/rss+xml", "text/xml", &["rss", "xml"], false),
    MediaType::new("application/rtf", "", &["rtf", "rtx"], true),
    MediaType::new("application/rtploopback", "", &[], true),
    MediaType::new("application/rtx", "", &[], true),
    MediaType::new("application/samlassertion+xml", "text/xml", &[], true),
    MediaType::new("application/samlmetadata+xml", "text/xml", &[], true),
    MediaType::new("application/sarif+json", "application/json", &[], true),
    MediaType::new("application/sarif-external-properties+json", "application/json", &[], true),
    MediaType::new("application/sbe", "", &[], true),
    MediaType::new("application/sbml+xml", "text/xml", &["sbml"], true),
    MediaType::new("application/scaip+xml", "text/xml", &[], true),
    MediaType::new("application/scim+json", "application/json", &[], true),
    MediaType::new("application/scvp-cv-request", "", &["scq"], true),
    MediaType::new("application/scvp-cv-response", "", &["scs"], true),
    MediaType::new("application/scvp-vp-request", "", &["spq"], true),
    MediaType::new("application/scvp-vp-response", "", &["spp"], true),
    MediaType::new("application/sdp", "", &["sdp"], true),
    MediaType::new("application/sea", "", &["sea"], false),
    MediaType::new("application/secevent+jwt", "application/jwt", &[], true),
    MediaType::new("application/senml+cbor", "application/cbor", &[], true),
    MediaType::new("application/senml+json", "application/json", &[], true),
    MediaType::new("application/senml+xml", "text/xml", &[], true),
    MediaType::new("application/senml-etch+cbor", "application/cbor", &[], true),
    MediaType::new("application/senml-etch+json", "application/json", &[], true),
    MediaType::new("application/senml-exi", "", &[], true),
    MediaType::new("application/sensml+cbor", "application/cbor", &[], true),
    MediaType::new("application/sensml+json", "application/json", &[], true),
    MediaType::new("application/sensml+xml", "text/xml", &[], true),
    MediaType::new("application/sensml-exi", "", &[], true),
    MediaType::new("application/sep+xml", "text/xml", &[], true),
    MediaType::new("application/sep-exi", "", &[], true),
    MediaType::new("application/session-info", "", &[], true),
    MediaType::new("application/set", "", &["set"], false),
    MediaType::new("application/set-payment", "", &[], true),
    MediaType::new("application/set-payment-initiation", "", &["setpay"], true),
    MediaType::new("application/set-registration", "", &[], true),
    MediaType::new("application/set-registration-initiation", "", &["setreg"], true),
    MediaType::new("application/sgml", "", &[], false),
    MediaType::new("application/sgml-open-catalog", "", &[], true),
    MediaType::new("application/shf+xml", "text/xml", &["shf"], true),
    MediaType::new("application/sieve", "", &[], true),
    MediaType::new("application/simple-filter+xml", "text/xml", &[], true),
    MediaType::new("application/simple-message-summary", "", &[], true),
    MediaType::new("application/simpleSymbolContainer", "", &[], true),
    MediaType::new("application/sipc", "", &[], true),
    MediaType::new("application/sla", "", &["stl"], false),
    MediaType::new("application/slate", "", &[], true),
    MediaType::new("application/smil", "", &["smi", "smil"], true),
    MediaType::new("application/smil+xml", "text/xml", &["smi", "smil"], true),
    MediaType::new("application/smpte336m", "", &[], true),
    MediaType::new("application/soap+fastinfoset", "", &[], true),
    MediaType::new("application/soap+xml", "text/xml", &[], true),
    MediaType::new("application/solids", "", &["sol"], false),
    MediaType::new("application/sounder", "", &["sdr"], false),
    MediaType::new("application/sparql-query", "", &["rq"], true),
    MediaType::new("application/sparql-results+xml", "text/xml", &["srx"], true),
    MediaType::new("application/spdx+json", "application/json", &[], true),
    MediaType::new("application/spirits-event+xml", "text/xml", &[], true),
    MediaType::new("application/sql", "", &[], true),
    MediaType::new("application/srgs", "", &["gram"], true),
    MediaType::new("application/srgs+xml", "text/xml", &["grxml"], true),
    MediaType::new("application/sru+xml", "text/xml", &["sru"], true),
    MediaType::new("application/ssdl+xml", "text/xml", &["ssdl"], false),
    MediaType::new("application/ssml+xml", "text/xml", &["ssml"], true),
    MediaType::new("application/step", "", &["step", "stp"], false),
    MediaType::new("application/stix+json", "application/json", &[], true),
    MediaType::new("application/streamingmedia", "", &["ssm"], false),
    MediaType::new("application/swid+cbor", "application/cbor", &[], true),
    MediaType::new("application/swid+xml", "text/xml", &[], true),
    MediaType::new("application/tamp-apex-update", "", &[], true),
    MediaType::new("application/tamp-apex-update-confirm", "", &[], true),
    MediaType::new("application/tamp-community-update", "", &[], true),
    MediaType::new("application/tamp-community-update-confirm", "", &[], true),
    MediaType::new("application/tamp-error", "", &[], true),
    MediaType::new("application/tamp-sequence-adjust", "", &[], true),
    MediaType::new("application/tamp-sequence-adjust-confirm", "", &[], true),
    MediaType::new("application/tamp-status-query", "", &[], true),
    MediaType::new("application/tamp-status-response", "", &[], true),
    MediaType::new("application/tamp-update", "", &[], true),
    MediaType::new("application/tamp-update-confirm", "", &[], true),
    MediaType::new("application/taxii+json", "application/json", &[], true),
    MediaType::new("application/td+json", "application/json", &[], true),
    MediaType::new("application/tei+xml", "text/xml", &["tei", "teicorpus"], true),
    MediaType::new("application/thraud+xml", "text/xml", &["tfi"], true),
    MediaType::new("application/timestamp-query", "", &[], true),
    MediaType::new("application/timestamp-reply", "", &[], true),
    MediaType::new("application/timestamped-data", "", &["tsd"], true),
    MediaType::new("application/tlsrpt+gzip", "application/x-gzip", &[], true),
    MediaType::new("application/tlsrpt+json", "application/json", &[], true),
    MediaType::new("application/tm+json", "application/json", &[], true),
    MediaType::new("application/tnauthlist", "", &[], true),
    MediaType::new("application/token-introspection+jwt", "application/jwt", &[], true),
    MediaType::new("application/toolbook", "", &["tbk"], false),
    MediaType::new("application/trickle-ice-sdpfrag", "", &[], true),
    MediaType::new("application/trig", "", &[], true),
    MediaType::new("application/ttml+xml", "text/xml", &[], true),
    MediaType::new("application/tve-trigger", "", &[], true),
    MediaType::new("application/tzif", "", &[], true),
    MediaType::new("application/tzif-leap", "", &[], true),
    MediaType::new("application/ulpfec", "", &[], true),
    MediaType::new("application/urc-grpsheet+xml", "text/xml", &[], true),
    MediaType::new("application/urc-ressheet+xml", "text/xml", &[], true),
    MediaType::new("application/urc-targetdesc+xml", "text/xml", &[], true),
    MediaType::new("application/urc-uisocketdesc+xml", "text/xml", &[], true),
    MediaType::new("application/vcard+json", "application/json", &[], true),
    MediaType::new("application/vcard+xml", "text/xml", &[], true),
    MediaType::new("application/vda", "", &["vda"], false),
    MediaType::new("application/vemmi", "", &[], true),
    MediaType::new("application/vividence.scriptfile", "", &[], false),
    MediaType::new("application/vnd.1000minds.decision-model+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.3M.Post-it-Notes", "", &[], true),
    MediaType::new("application/vnd.3gpp-prose+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.3gpp-prose-pc3a+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.3gpp-prose-pc3ach+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.3gpp-prose-pc3ch+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.3gpp-prose-pc8+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.3gpp-v2x-local-service-information", "", &[], true),
    MediaType::new("application/vnd.3gpp.5gnas", "", &[], true),
    MediaType::new("application/vnd.3gpp.GMOP+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.3gpp.SRVCC-info+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.3gpp.access-transfer-events+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.3gpp.bsf+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.3gpp.gtpc", "", &[], true),
    MediaType::new("application/vnd.3gpp.interworking-data", "", &[], true),
    MediaType::new("application/vnd.3gpp.lpp", "", &[], true),
    MediaType::new("application/vnd.3gpp.mc-signalling-ear", "", &[], true),
    MediaType::new("application/vnd.3gpp.mcdata-affiliation-command+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.3gpp.mcdata-info+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.3gpp.mcdata-msgstore-ctrl-request+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.3gpp.mcdata-payload", "", &[], true),
    MediaType::new("application/vnd.3gpp.mcdata-regroup+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.3gpp.mcdata-service-config+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.3gpp.mcdata-signalling", "", &[], true),
    MediaType::new("application/vnd.3gpp.mcdata-ue-config+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.3gpp.mcdata-user-profile+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.3gpp.mcptt-affiliation-command+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.3gpp.mcptt-floor-request+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.3gpp.mcptt-info+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.3gpp.mcptt-location-info+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.3gpp.mcptt-mbms-usage-info+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.3gpp.mcptt-service-config+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.3gpp.mcptt-signed+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.3gpp.mcptt-ue-config+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.3gpp.mcptt-ue-init-config+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.3gpp.mcptt-user-profile+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.3gpp.mcvideo-affiliation-command+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.3gpp.mcvideo-affiliation-info+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.3gpp.mcvideo-info+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.3gpp.mcvideo-location-info+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.3gpp.mcvideo-mbms-usage-info+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.3gpp.mcvideo-service-config+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.3gpp.mcvideo-transmission-request+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.3gpp.mcvideo-ue-config+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.3gpp.mcvideo-user-profile+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.3gpp.mid-call+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.3gpp.ngap", "", &[], true),
    MediaType::new("application/vnd.3gpp.pfcp", "", &[], true),
    MediaType::new("application/vnd.3gpp.pic-bw-large", "", &["plb"], true),
    MediaType::new("application/vnd.3gpp.pic-bw-small", "", &["psb"], true),
    MediaType::new("application/vnd.3gpp.pic-bw-var", "", &["pvb"], true),
    MediaType::new("application/vnd.3gpp.s1ap", "", &[], true),
    MediaType::new("application/vnd.3gpp.sms", "", &[], true),
    MediaType::new("application/vnd.3gpp.sms+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.3gpp.srvcc-ext+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.3gpp.state-and-event-info+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.3gpp.ussd+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.3gpp2.bcmcsinfo+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.3gpp2.sms", "", &[], true),
    MediaType::new("application/vnd.3gpp2.tcap", "", &["tcap"], true),
    MediaType::new("application/vnd.3lightssoftware.imagescal", "", &[], true),
    MediaType::new("application/vnd.HandHeld-Entertainment+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.Kinar", "", &[], true),
    MediaType::new("application/vnd.Mobius.DAF", "", &[], true),
    MediaType::new("application/vnd.Mobius.DIS", "", &[], true),
    MediaType::new("application/vnd.Mobius.MBK", "", &[], true),
    MediaType::new("application/vnd.Mobius.MQY", "", &[], true),
    MediaType::new("application/vnd.Mobius.MSL", "", &[], true),
    MediaType::new("application/vnd.Quark.QuarkXPress", "", &[], true),
    MediaType::new("application/vnd.SimTech-MindMapper", "", &[], true),
    MediaType::new("application/vnd.accpac.simply.aso", "", &["aso"], true),
    MediaType::new("application/vnd.accpac.simply.imp", "", &["imp"], true),
    MediaType::new("application/vnd.acucobol", "", &["acu"], true),
    MediaType::new("application/vnd.acucorp", "", &["atc", "acutc"], true),
    MediaType::new("application/vnd.adobe.air-application-installer-package+zip", "application/zip", &["air"], false),
    MediaType::new("application/vnd.adobe.flash.movie", "", &[], true),
    MediaType::new("application/vnd.adobe.formscentral.fcdt", "", &["fcdt"], true),
    MediaType::new("application/vnd.adobe.fxp", "", &["fxp", "fxpl"], true),
    MediaType::new("application/vnd.adobe.partial-upload", "", &[], true),
    MediaType::new("application/vnd.adobe.xdp+xml", "text/xml", &["xdp"], true),
    MediaType::new("application/vnd.adobe.xfdf", "", &["xfdf"], false),
    MediaType::new("application/vnd.aether.imp", "", &[], true),
    MediaType::new("application/vnd.afpc.afplinedata", "", &[], true),
    MediaType::new("application/vnd.afpc.afplinedata-pagedef", "", &[], true),
    MediaType::new("application/vnd.afpc.cmoca-cmresource", "", &[], true),
    MediaType::new("application/vnd.afpc.foca-charset", "", &[], true),
    MediaType::new("application/vnd.afpc.foca-codedfont", "", &[], true),
    MediaType::new("application/vnd.afpc.foca-codepage", "", &[], true),
    MediaType::new("application/vnd.afpc.modca", "", &[], true),
    MediaType::new("application/vnd.afpc.modca-cmtable", "", &[], true),
    MediaType::new("application/vnd.afpc.modca-formdef", "", &[], true),
    MediaType::new("application/vnd.afpc.modca-mediummap", "", &[], true),
    MediaType::new("application/vnd.afpc.modca-objectcontainer", "", &[], true),
    MediaType::new("application/vnd.afpc.modca-overlay", "", &[], true),
    MediaType::new("application/vnd.afpc.modca-pagesegment", "", &[], true),
    MediaType::new("application/vnd.age", "", &[], true),
    MediaType::new("application/vnd.ah-barcode", "", &[], true),
    MediaType::new("application/vnd.ahead.space", "", &["ahead"], true),
    MediaType::new("application/vnd.airzip.filesecure.azf", "", &["azf"], true),
    MediaType::new("application/vnd.airzip.filesecure.azs", "", &["azs"], true),
    MediaType::new("application/vnd.amadeus+json", "application/json", &[], true),
    MediaType::new("application/vnd.amazon.ebook", "", &["azw"], false),
    MediaType::new("application/vnd.amazon.mobi8-ebook", "", &[], true),
    MediaType::new("application/vnd.americandynamics.acc", "", &["acc"], true),
    MediaType::new("application/vnd.amiga.ami", "", &["ami"], true),
    MediaType::new("application/vnd.amundsen.maze+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.android.ota", "", &[], true),
    MediaType::new("application/vnd.android.package-archive", "", &["apk"], false),
    MediaType::new("application/vnd.anki", "", &[], true),
    MediaType::new("application/vnd.anser-web-certificate-issue-initiation", "", &["cii"], true),
    MediaType::new("application/vnd.anser-web-funds-transfer-initiation", "", &["fti"], false),
    MediaType::new("application/vnd.antix.game-component", "", &["atx"], true),
    MediaType::new("application/vnd.apache.arrow.file", "", &[], true),
    MediaType::new("application/vnd.apache.arrow.stream", "", &[], true),
    MediaType::new("application/vnd.apache.thrift.binary", "", &[], true),
    MediaType::new("application/vnd.apache.thrift.compact", "", &[], true),
    MediaType::new("application/vnd.apache.thrift.json", "", &[], true),
    MediaType::new("application/vnd.apexlang", "", &[], true),
    MediaType::new("application/vnd.api+json", "application/json", &[], true),
    MediaType::new("application/vnd.aplextor.warrp+json", "application/json", &[], true),
    MediaType::new("application/vnd.apothekende.reservation+json", "application/json", &[], true),
    MediaType::new("application/vnd.apple.installer+xml", "text/xml", &["mpkg"], true),
    MediaType::new("application/vnd.apple.keynote", "", &[], true),
    MediaType::new("application/vnd.apple.mpegurl", "", &["m3u8"], true),
    MediaType::new("application/vnd.apple.numbers", "", &[], true),
    MediaType::new("application/vnd.apple.pages", "", &[], true),
    MediaType::new("application/vnd.arastra.swi", "", &["swi"], true),
    MediaType::new("application/vnd.aristanetworks.swi", "", &["swi"], true),
    MediaType::new("application/vnd.artisan+json", "application/json", &[], true),
    MediaType::new("application/vnd.artsquare", "", &[], true),
    MediaType::new("application/vnd.astraea-software.iota", "", &["iota"], true),
    MediaType::new("application/vnd.audiograph", "", &["aep"], true),
    MediaType::new("application/vnd.autopackage", "", &[], true),
    MediaType::new("application/vnd.avalon+json", "application/json", &[], true),
    MediaType::new("application/vnd.avistar+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.balsamiq.bmml+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.balsamiq.bmpr", "", &[], true),
    MediaType::new("application/vnd.banana-accounting", "", &[], true),
    MediaType::new("application/vnd.bbf.usp.error", "", &[], true),
    MediaType::new("application/vnd.bbf.usp.msg", "", &[], true),
    MediaType::new("application/vnd.bbf.usp.msg+json", "application/json", &[], true),
    MediaType::new("application/vnd.bekitzur-stech+json", "application/json", &[], true),
    MediaType::new("application/vnd.belightsoft.lhzd+zip", "application/zip", &[], true),
    MediaType::new("application/vnd.belightsoft.lhzl+zip", "application/zip", &[], true),
    MediaType::new("application/vnd.bint.med-content", "", &[], true),
    MediaType::new("application/vnd.biopax.rdf+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.blink-idb-value-wrapper", "", &[], true),
    MediaType::new("application/vnd.blueice.multipass", "", &["mpm"], true),
    MediaType::new("application/vnd.bluetooth.ep.oob", "", &[], true),
    MediaType::new("application/vnd.bluetooth.le.oob", "", &[], true),
    MediaType::new("application/vnd.bmi", "", &["bmi"], true),
    MediaType::new("application/vnd.bpf", "", &[], true),
    MediaType::new("application/vnd.bpf3", "", &[], true),
    MediaType::new("application/vnd.businessobjects", "", &["rep"], true),
    MediaType::new("application/vnd.byu.uapi+json", "application/json", &[], true),
    MediaType::new("application/vnd.cab-jscript", "", &[], true),
    MediaType::new("application/vnd.canon-cpdl", "", &[], true),
    MediaType::new("application/vnd.canon-lips", "", &[], true),
    MediaType::new("application/vnd.capasystems-pg+json", "application/json", &[], true),
    MediaType::new("application/vnd.cendio.thinlinc.clientconf", "", &[], true),
    MediaType::new("application/vnd.century-systems.tcp_stream", "", &[], true),
    MediaType::new("application/vnd.chemdraw+xml", "text/xml", &["cdxml"], true),
    MediaType::new("application/vnd.chess-pgn", "", &[], true),
    MediaType::new("application/vnd.chipnuts.karaoke-mmd", "", &["mmd"], true),
    MediaType::new("application/vnd.ciedi", "", &[], true),
    MediaType::new("application/vnd.cinderella", "", &["cdy"], true),
    MediaType::new("application/vnd.cirpack.isdn-ext", "", &[], true),
    MediaType::new("application/vnd.citationstyles.style+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.claymore", "", &["cla"], true),
    MediaType::new("application/vnd.cloanto.rp9", "", &["rp9"], true),
    MediaType::new("application/vnd.clonk.c4group", "", &["c4g", "c4d", "c4f", "c4p", "c4u"], true),
    MediaType::new("application/vnd.cluetrust.cartomobile-config", "", &["c11amc"], true),
    MediaType::new("application/vnd.cluetrust.cartomobile-config-pkg", "", &["c11amz"], true),
    MediaType::new("application/vnd.cncf.helm.chart.content.v1.tar+gzip", "application/x-gzip", &[], true),
    MediaType::new("application/vnd.cncf.helm.chart.provenance.v1.prov", "", &[], true),
    MediaType::new("application/vnd.coffeescript", "", &[], true),
    MediaType::new("application/vnd.collabio.xodocuments.document", "", &[], true),
    MediaType::new("application/vnd.collabio.xodocuments.document-template", "", &[], true),
    MediaType::new("application/vnd.collabio.xodocuments.presentation", "", &[], true),
    MediaType::new("application/vnd.collabio.xodocuments.presentation-template", "", &[], true),
    MediaType::new("application/vnd.collabio.xodocuments.spreadsheet", "", &[], true),
    MediaType::new("application/vnd.collabio.xodocuments.spreadsheet-template", "", &[], true),
    MediaType::new("application/vnd.collection+json", "application/json", &[], true),
    MediaType::new("application/vnd.collection.doc+json", "application/json", &[], true),
    MediaType::new("application/vnd.collection.next+json", "application/json", &[], true),
    MediaType::new("application/vnd.comicbook+zip", "application/zip", &[], true),
    MediaType::new("application/vnd.comicbook-rar", "", &[], true),
    MediaType::new("application/vnd.commerce-battelle", "", &[], true),
    MediaType::new("application/vnd.commonspace", "", &["csp"], true),
    MediaType::new("application/vnd.comsocaller", "", &[], false),
    MediaType::new("application/vnd.contact.cmsg", "", &["cdbcmsg"], true),
    MediaType::new("application/vnd.coreos.ignition+json", "application/json", &[], true),
    MediaType::new("application/vnd.cosmocaller", "", &["cmc"], true),
    MediaType::new("application/vnd.crick.clicker", "", &["clkx"], true),
    MediaType::new("application/vnd.crick.clicker.keyboard", "", &["clkk"], true),
    MediaType::new("application/vnd.crick.clicker.palette", "", &["clkp"], true),
    MediaType::new("application/vnd.crick.clicker.template", "", &["clkt"], true),
    MediaType::new("application/vnd.crick.clicker.wordbank", "", &["clkw"], true),
    MediaType::new("application/vnd.criticaltools.wbs+xml", "text/xml", &["wbs"], true),
    MediaType::new("application/vnd.cryptii.pipe+json", "application/json", &[], true),
    MediaType::new("application/vnd.crypto-shade-file", "", &[], true),
    MediaType::new("application/vnd.cryptomator.encrypted", "", &[], true),
    MediaType::new("application/vnd.cryptomator.vault", "", &[], true),
    MediaType::new("application/vnd.ctc-posml", "", &["pml"], true),
    MediaType::new("application/vnd.ctct.ws+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.cups-pdf", "", &[], true),
    MediaType::new("application/vnd.cups-postscript", "", &[], true),
    MediaType::new("application/vnd.cups-ppd", "", &["ppd"], true),
    MediaType::new("application/vnd.cups-raster", "", &[], true),
    MediaType::new("application/vnd.cups-raw", "", &[], true),
    MediaType::new("application/vnd.curl", "", &[], true),
    MediaType::new("application/vnd.curl.car", "", &["car"], false),
    MediaType::new("application/vnd.curl.pcurl", "", &["pcurl"], false),
    MediaType::new("application/vnd.cyan.dean.root+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.cybank", "", &[], true),
    MediaType::new("application/vnd.cyclonedx+json", "application/json", &[], true),
    MediaType::new("application/vnd.cyclonedx+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.d2l.coursepackage1p0+zip", "application/zip", &[], true),
    MediaType::new("application/vnd.d3m-dataset", "", &[], true),
    MediaType::new("application/vnd.d3m-problem", "", &[], true),
    MediaType::new("application/vnd.dart", "", &["dart"], true),
    MediaType::new("application/vnd.data-vision.rdz", "", &["rdz"], true),
    MediaType::new("application/vnd.datalog", "", &[], true),
    MediaType::new("application/vnd.datapackage+json", "application/json", &[], true),
    MediaType::new("application/vnd.dataresource+json", "application/json", &[], true),
    MediaType::new("application/vnd.dbf", "", &[], true),
    MediaType::new("application/vnd.debian.binary-package", "", &[], true),
    MediaType::new("application/vnd.dece.data", "", &["uvf", "uvvf", "uvd", "uvvd"], true),
    MediaType::new("application/vnd.dece.ttml+xml", "text/xml", &["uvt", "uvvt"], true),
    MediaType::new("application/vnd.dece.unspecified", "", &["uvx", "uvvx"], true),
    MediaType::new("application/vnd.dece.zip", "", &["uvz", "uvvz"], true),
    MediaType::new("application/vnd.denovo.fcselayout-link", "", &["fe_launch"], true),
    MediaType::new("application/vnd.desmume.movie", "", &[], true),
    MediaType::new("application/vnd.dir-bi.plate-dl-nosuffix", "", &[], true),
    MediaType::new("application/vnd.dm.delegation+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.dna", "", &["dna"], true),
    MediaType::new("application/vnd.document+json", "application/json", &[], true),
    MediaType::new("application/vnd.dolby.mlp", "", &["mlp"], false),
    MediaType::new("application/vnd.dolby.mobile.1", "", &[], true),
    MediaType::new("application/vnd.dolby.mobile.2", "", &[], true),
    MediaType::new("application/vnd.doremir.scorecloud-binary-document", "", &[], true),
    MediaType::new("application/vnd.dpgraph", "", &["dpg"], true),
    MediaType::new("application/vnd.dreamfactory", "", &["dfac"], true),
    MediaType::new("application/vnd.drive+json", "application/json", &[], true),
    MediaType::new("application/vnd.ds-keypoint", "", &["kpxx"], false),
    MediaType::new("application/vnd.dtg.local", "", &[], true),
    MediaType::new("application/vnd.dtg.local.flash", "", &[], true),
    MediaType::new("application/vnd.dtg.local.html", "", &[], true),
    MediaType::new("application/vnd.dvb.ait", "", &["ait"], true),
    MediaType::new("application/vnd.dvb.dvbisl+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.dvb.dvbj", "", &[], true),
    MediaType::new("application/vnd.dvb.esgcontainer", "", &[], true),
    MediaType::new("application/vnd.dvb.ipdcdftnotifaccess", "", &[], true),
    MediaType::new("application/vnd.dvb.ipdcesgaccess", "", &[], true),
    MediaType::new("application/vnd.dvb.ipdcesgaccess2", "", &[], true),
    MediaType::new("application/vnd.dvb.ipdcesgpdd", "", &[], true),
    MediaType::new("application/vnd.dvb.ipdcroaming", "", &[], true),
    MediaType::new("application/vnd.dvb.iptv.alfec-base", "", &[], true),
    MediaType::new("application/vnd.dvb.iptv.alfec-enhancement", "", &[], true),
    MediaType::new("application/vnd.dvb.notif-aggregate-root+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.dvb.notif-container+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.dvb.notif-generic+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.dvb.notif-ia-msglist+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.dvb.notif-ia-registration-request+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.dvb.notif-ia-registration-response+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.dvb.notif-init+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.dvb.pfr", "", &[], true),
    MediaType::new("application/vnd.dvb.service", "", &["svc"], true),
    MediaType::new("application/vnd.dxr", "", &[], true),
    MediaType::new("application/vnd.dynageo", "", &["geo"], true),
    MediaType::new("application/vnd.dzr", "", &[], true),
    MediaType::new("application/vnd.easykaraoke.cdgdownload", "", &[], true),
    MediaType::new("application/vnd.ecdis-update", "", &[], true),
    MediaType::new("application/vnd.ecip.rlp", "", &[], true),
    MediaType::new("application/vnd.eclipse.ditto+json", "application/json", &[], true),
    MediaType::new("application/vnd.ecowin.chart", "", &["mag"], true),
    MediaType::new("application/vnd.ecowin.filerequest", "", &[], true),
    MediaType::new("application/vnd.ecowin.fileupdate", "", &[], true),
    MediaType::new("application/vnd.ecowin.series", "", &[], true),
    MediaType::new("application/vnd.ecowin.seriesrequest", "", &[], true),
    MediaType::new("application/vnd.ecowin.seriesupdate", "", &[], true),
    MediaType::new("application/vnd.efi.img", "", &[], true),
    MediaType::new("application/vnd.efi.iso", "", &[], true),
    MediaType::new("application/vnd.emclient.accessrequest+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.enliven", "", &["nml"], true),
    MediaType::new("application/vnd.enphase.envoy", "", &[], true),
    MediaType::new("application/vnd.eprints.data+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.epson.esf", "", &["esf"], true),
    MediaType::new("application/vnd.epson.msf", "", &["msf"], true),
    MediaType::new("application/vnd.epson.quickanime", "", &["qam"], true),
    MediaType::new("application/vnd.epson.salt", "", &["slt"], true),
    MediaType::new("application/vnd.epson.ssf", "", &["ssf"], true),
    MediaType::new("application/vnd.ericsson.quickcall", "", &[], true),
    MediaType::new("application/vnd.espass-espass+zip", "application/zip", &[], true),
    MediaType::new("application/vnd.eszigno3+xml", "text/xml", &["es3", "et3"], true),
    MediaType::new("application/vnd.etsi.aoc+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.etsi.asic-e+zip", "application/zip", &[], true),
    MediaType::new("application/vnd.etsi.asic-s+zip", "application/zip", &[], true),
    MediaType::new("application/vnd.etsi.cug+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.etsi.iptvcommand+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.etsi.iptvdiscovery+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.etsi.iptvprofile+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.etsi.iptvsad-bc+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.etsi.iptvsad-cod+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.etsi.iptvsad-npvr+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.etsi.iptvservice+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.etsi.iptvsync+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.etsi.iptvueprofile+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.etsi.mcid+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.etsi.mheg5", "", &[], true),
    MediaType::new("application/vnd.etsi.overload-control-policy-dataset+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.etsi.pstn+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.etsi.sci+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.etsi.simservs+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.etsi.timestamp-token", "", &[], true),
    MediaType::new("application/vnd.etsi.tsl+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.etsi.tsl.der", "", &[], true),
    MediaType::new("application/vnd.eu.kasparian.car+json", "application/json", &[], true),
    MediaType::new("application/vnd.eudora.data", "", &[], true),
    MediaType::new("application/vnd.evolv.ecig.profile", "", &[], true),
    MediaType::new("application/vnd.evolv.ecig.settings", "", &[], true),
    MediaType::new("application/vnd.evolv.ecig.theme", "", &[], true),
    MediaType::new("application/vnd.exstream-empower+zip", "application/zip", &[], true),
    MediaType::new("application/vnd.exstream-package", "", &[], true),
    MediaType::new("application/vnd.ezpix-album", "", &["ez2"], true),
    MediaType::new("application/vnd.ezpix-package", "", &["ez3"], true),
    MediaType::new("application/vnd.f-secure.mobile", "", &[], true),
    MediaType::new("application/vnd.familysearch.gedcom+zip", "application/zip", &[], true),
    MediaType::new("application/vnd.fastcopy-disk-image", "", &[], true),
    MediaType::new("application/vnd.fdf", "", &["fdf"], false),
    MediaType::new("application/vnd.fdsn.mseed", "", &["mseed"], true),
    MediaType::new("application/vnd.fdsn.seed", "", &["seed", "dataless"], true),
    MediaType::new("application/vnd.ffsns", "", &[], true),
    MediaType::new("application/vnd.ficlab.flb+zip", "application/zip", &[], true),
    MediaType::new("application/vnd.filmit.zfc", "", &[], true),
    MediaType::new("application/vnd.fints", "", &[], true),
    MediaType::new("application/vnd.firemonkeys.cloudcell", "", &[], true),
    MediaType::new("application/vnd.flographit", "", &["gph"], false),
    MediaType::new("application/vnd.fluxtime.clip", "", &["ftc"], true),
    MediaType::new("application/vnd.font-fontforge-sfd", "", &[], true),
    MediaType::new("application/vnd.framemaker", "", &["fm", "frame", "maker", "book"], true),
    MediaType::new("application/vnd.frogans.fnc", "", &["fnc"], true),
    MediaType::new("application/vnd.frogans.ltf", "", &["ltf"], true),
    MediaType::new("application/vnd.fsc.weblaunch", "", &["fsc"], true),
    MediaType::new("application/vnd.fujifilm.fb.docuworks", "", &[], true),
    MediaType::new("application/vnd.fujifilm.fb.docuworks.binder", "", &[], true),
    MediaType::new("application/vnd.fujifilm.fb.docuworks.container", "", &[], true),
    MediaType::new("application/vnd.fujifilm.fb.jfi+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.fujitsu.oasys", "", &["oas"], true),
    MediaType::new("application/vnd.fujitsu.oasys2", "", &["oa2"], true),
    MediaType::new("application/vnd.fujitsu.oasys3", "", &["oa3"], true),
    MediaType::new("application/vnd.fujitsu.oasysgp", "", &["fg5"], true),
    MediaType::new("application/vnd.fujitsu.oasysprs", "", &["bh2"], true),
    MediaType::new("application/vnd.fujixerox.HBPL", "", &[], true),
    MediaType::new("application/vnd.fujixerox.art-ex", "", &[], false),
    MediaType::new("application/vnd.fujixerox.art4", "", &[], false),
    MediaType::new("application/vnd.fujixerox.ddd", "", &["ddd"], true),
    MediaType::new("application/vnd.fujixerox.docuworks", "", &["xdw"], true),
    MediaType::new("application/vnd.fujixerox.docuworks.binder", "", &["xbd"], true),
    MediaType::new("application/vnd.fujixerox.docuworks.container", "", &[], true),
    MediaType::new("application/vnd.fut-misnet", "", &[], true),
    MediaType::new("application/vnd.futoin+cbor", "application/cbor", &[], true),
    MediaType::new("application/vnd.futoin+json", "application/json", &[], true),
    MediaType::new("application/vnd.fuzzysheet", "", &["fzs"], true),
    MediaType::new("application/vnd.genomatix.tuxedo", "", &["txd"], true),
    MediaType::new("application/vnd.genozip", "", &[], true),
    MediaType::new("application/vnd.gentics.grd+json", "application/json", &[], true),
    MediaType::new("application/vnd.gentoo.catmetadata+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.gentoo.ebuild", "", &[], true),
    MediaType::new("application/vnd.gentoo.eclass", "", &[], true),
    MediaType::new("application/vnd.gentoo.gpkg", "", &[], true),
    MediaType::new("application/vnd.gentoo.manifest", "", &[], true),
    MediaType::new("application/vnd.gentoo.pkgmetadata+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.gentoo.xpak", "", &[], true),
    MediaType::new("application/vnd.geo+json", "application/json", &[], true),
    MediaType::new("application/vnd.geocube+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.geogebra.file", "", &["ggb"], true),
    MediaType::new("application/vnd.geogebra.slides", "", &[], true),
    MediaType::new("application/vnd.geogebra.tool", "", &["ggt"], true),
    MediaType::new("application/vnd.geometry-explorer", "", &["gex", "gre"], true),
    MediaType::new("application/vnd.geonext", "", &["gxt"], true),
    MediaType::new("application/vnd.geoplan", "", &["g2w"], true),
    MediaType::new("application/vnd.geospace", "", &["g3w"], true),
    MediaType::new("application/vnd.gerber", "", &[], true),
    MediaType::new("application/vnd.globalplatform.card-content-mgt", "", &[], true),
    MediaType::new("application/vnd.globalplatform.card-content-mgt-response", "", &[], true),
    MediaType::new("application/vnd.gmx", "", &["gmx"], true),
    MediaType::new("application/vnd.gnu.taler.exchange+json", "application/json", &[], true),
    MediaType::new("application/vnd.gnu.taler.merchant+json", "application/json", &[], true),
    MediaType::new("application/vnd.google-earth.kml+xml", "text/xml", &["kml"], true),
    MediaType::new("application/vnd.google-earth.kmz", "", &["kmz"], true),
    MediaType::new("application/vnd.gov.sk.e-form+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.gov.sk.e-form+zip", "application/zip", &[], true),
    MediaType::new("application/vnd.gov.sk.xmldatacontainer+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.grafeq", "", &["gqf", "gqs"], true),
    MediaType::new("application/vnd.gridmp", "", &[], true),
    MediaType::new("application/vnd.groove-account", "", &["gac"], true),
    MediaType::new("application/vnd.groove-help", "", &["ghf"], true),
    MediaType::new("application/vnd.groove-identity-message", "", &["gim"], true),
    MediaType::new("application/vnd.groove-injector", "", &["grv"], true),
    MediaType::new("application/vnd.groove-tool-message", "", &["gtm"], true),
    MediaType::new("application/vnd.groove-tool-template", "", &["tpl"], true),
    MediaType::new("application/vnd.groove-vcard", "", &["vcg"], true),
    MediaType::new("application/vnd.hal+json", "application/json", &[], true),
    MediaType::new("application/vnd.hal+xml", "text/xml", &["hal"], true),
    MediaType::new("application/vnd.hbci", "", &["hbci"], true),
    MediaType::new("application/vnd.hc+json", "application/json", &[], true),
    MediaType::new("application/vnd.hcl-bireports", "", &[], true),
    MediaType::new("application/vnd.hdt", "", &[], true),
    MediaType::new("application/vnd.heroku+json", "application/json", &[], true),
    MediaType::new("application/vnd.hhe.lesson-player", "", &["les"], true),
    MediaType::new("application/vnd.hp-PCLXL", "", &[], true),
    MediaType::new("application/vnd.hp-hpgl", "", &["hgl", "hpg", "hpgl"], false),
    MediaType::new("application/vnd.hp-hpid", "", &["hpid"], true),
    MediaType::new("application/vnd.hp-hps", "", &["hps"], true),
    MediaType::new("application/vnd.hp-jlyt", "", &["jlt"], true),
    MediaType::new("application/vnd.hp-pcl", "", &["pcl"], false),
    MediaType::new("application/vnd.httphone", "", &[], true),
    MediaType::new("application/vnd.hydrostatix.sof-data", "", &["sfd-hdstx"], true),
    MediaType::new("application/vnd.hyper+json", "application/json", &[], true),
    MediaType::new("application/vnd.hyper-item+json", "application/json", &[], true),
    MediaType::new("application/vnd.hyperdrive+json", "application/json", &[], true),
    MediaType::new("application/vnd.hzn-3d-crossword", "", &["x3d"], true),
    MediaType::new("application/vnd.ibm.MiniPay", "", &[], true),
    MediaType::new("application/vnd.ibm.afplinedata", "", &[], true),
    MediaType::new("application/vnd.ibm.electronic-media", "", &[], true),
    MediaType::new("application/vnd.ibm.modcap", "", &["afp", "listafp", "list3820"], true),
    MediaType::new("application/vnd.ibm.rights-management", "", &["irm"], true),
    MediaType::new("application/vnd.ibm.secure-container", "", &["sc"], true),
    MediaType::new("application/vnd.iccprofile", "", &["icc", "icm"], true),
    MediaType::new("application/vnd.ieee.1905", "", &[], true),
    MediaType::new("application/vnd.igloader", "", &["igl"], true),
    MediaType::new("application/vnd.imagemeter.folder+zip", "application/zip", &[], true),
    MediaType::new("application/vnd.imagemeter.image+zip", "application/zip", &[], true),
    MediaType::new("application/vnd.immervision-ivp", "", &["ivp"], true),
    MediaType::new("application/vnd.immervision-ivu", "", &["ivu"], true),
    MediaType::new("application/vnd.ims.imsccv1p1", "", &[], true),
    MediaType::new("application/vnd.ims.imsccv1p2", "", &[], true),
    MediaType::new("application/vnd.ims.imsccv1p3", "", &[], true),
    MediaType::new("application/vnd.ims.lis.v2.result+json", "application/json", &[], true),
    MediaType::new("application/vnd.ims.lti.v2.toolconsumerprofile+json", "application/json", &[], true),
    MediaType::new("application/vnd.ims.lti.v2.toolproxy+json", "application/json", &[], true),
    MediaType::new("application/vnd.ims.lti.v2.toolproxy.id+json", "application/json", &[], true),
    MediaType::new("application/vnd.ims.lti.v2.toolsettings+json", "application/json", &[], true),
    MediaType::new("application/vnd.ims.lti.v2.toolsettings.simple+json", "application/json", &[], true),
    MediaType::new("application/vnd.informedcontrol.rms+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.informix-visionary", "", &[], true),
    MediaType::new("application/vnd.infotech.project", "", &[], true),
    MediaType::new("application/vnd.infotech.project+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.innopath.wamp.notification", "", &[], true),
    MediaType::new("application/vnd.insors.igm", "", &["igm"], true),
    MediaType::new("application/vnd.intercon.formnet", "", &["xpw", "xpx"], true),
    MediaType::new("application/vnd.intergeo", "", &["i2g"], true),
    MediaType::new("application/vnd.intertrust.digibox", "", &[], true),
    MediaType::new("application/vnd.intertrust.nncp", "", &[], true),
    MediaType::new("application/vnd.intu.qbo", "", &["qbo"], true),
    MediaType::new("application/vnd.intu.qfx", "", &["qfx"], true),
    MediaType::new("application/vnd.ipld.car", "", &[], true),
    MediaType::new("application/vnd.ipld.dag-cbor", "", &[], true),
    MediaType::new("application/vnd.ipld.dag-json", "", &[], true),
    MediaType::new("application/vnd.ipld.raw", "", &[], true),
    MediaType::new("application/vnd.iptc.g2.catalogitem+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.iptc.g2.conceptitem+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.iptc.g2.knowledgeitem+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.iptc.g2.newsitem+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.iptc.g2.newsmessage+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.iptc.g2.packageitem+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.iptc.g2.planningitem+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.ipunplugged.rcprofile", "", &["rcprofile"], true),
    MediaType::new("application/vnd.irepository.package+xml", "text/xml", &["irp"], true),
    MediaType::new("application/vnd.is-xpr", "", &["xpr"], true),
    MediaType::new("application/vnd.isac.fcs", "", &["fcs"], true),
    MediaType::new("application/vnd.iso11783-10+zip", "application/zip", &[], true),
    MediaType::new("application/vnd.jam", "", &["jam"], true),
    MediaType::new("application/vnd.japannet-directory-service", "", &[], true),
    MediaType::new("application/vnd.japannet-jpnstore-wakeup", "", &[], true),
    MediaType::new("application/vnd.japannet-payment-wakeup", "", &[], true),
    MediaType::new("application/vnd.japannet-registration", "", &[], true),
    MediaType::new("application/vnd.japannet-registration-wakeup", "", &[], true),
    MediaType::new("application/vnd.japannet-setstore-wakeup", "", &[], true),
    MediaType::new("application/vnd.japannet-verification", "", &[], true),
    MediaType::new("application/vnd.japannet-verification-wakeup", "", &[], true),
    MediaType::new("application/vnd.jcp.javame.midlet-rms", "", &["rms"], true),
    MediaType::new("application/vnd.jisp", "", &["jisp"], true),
    MediaType::new("application/vnd.joost.joda-archive", "", &["joda"], true),
    MediaType::new("application/vnd.jsk.isdn-ngn", "", &[], true),
    MediaType::new("application/vnd.kahootz", "", &["ktz", "ktr"], true),
    MediaType::new("application/vnd.kde.karbon", "", &["karbon"], true),
    MediaType::new("application/vnd.kde.kchart", "", &["chrt"], true),
    MediaType::new("application/vnd.kde.kformula", "", &["kfo"], true),
    MediaType::new("application/vnd.kde.kivio", "", &["flw"], true),
    MediaType::new("application/vnd.kde.kontour", "", &["kon"], true),
    MediaType::new("application/vnd.kde.kpresenter", "", &["kpr", "kpt"], true),
    MediaType::new("application/vnd.kde.kspread", "", &["ksp"], true),
    MediaType::new("application/vnd.kde.kword", "", &["kwd", "kwt"], true),
    MediaType::new("application/vnd.kenameaapp", "", &["htke"], true),
    MediaType::new("application/vnd.kidspiration", "", &["kia"], true),
    MediaType::new("application/vnd.koan", "", &["skp", "skd", "skt", "skm"], true),
    MediaType::new("application/vnd.kodak-descriptor", "", &["sse"], true),
    MediaType::new("application/vnd.las", "", &[], true),
    MediaType::new("application/vnd.las.las+json", "application/json", &[], true),
    MediaType::new("application/vnd.las.las+xml", "text/xml", &["lasxml"], true),
    MediaType::new("application/vnd.laszip", "", &[], true),
    MediaType::new("application/vnd.leap+json", "application/json", &[], true),
    MediaType::new("application/vnd.liberty-request+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.llamagraphics.life-balance.desktop", "", &["lbd"], true),
    MediaType::new("application/vnd.llamagraphics.life-balance.exchange+xml", "text/xml", &["lbe"], true),
    MediaType::new("application/vnd.logipipe.circuit+zip", "application/zip", &[], true),
    MediaType::new("application/vnd.loom", "", &[], true),
    MediaType::new("application/vnd.lotus-1-2-3", "", &["123"], true),
    MediaType::new("application/vnd.lotus-approach", "", &["apr"], true),
    MediaType::new("application/vnd.lotus-freelance", "", &["pre"], true),
    MediaType::new("application/vnd.lotus-notes", "", &["nsf"], true),
    MediaType::new("application/vnd.lotus-organizer", "", &["org"], true),
    MediaType::new("application/vnd.lotus-screencam", "", &["scm"], true),
    MediaType::new("application/vnd.lotus-wordpro", "", &["lwp"], true),
    MediaType::new("application/vnd.macports.portpkg", "", &["portpkg"], true),
    MediaType::new("application/vnd.mapbox-vector-tile", "", &[], true),
    MediaType::new("application/vnd.marlin.drm.actiontoken+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.marlin.drm.conftoken+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.marlin.drm.license+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.marlin.drm.mdcf", "", &[], true),
    MediaType::new("application/vnd.mason+json", "application/json", &[], true),
    MediaType::new("application/vnd.maxar.archive.3tz+zip", "application/zip", &[], true),
    MediaType::new("application/vnd.maxmind.maxmind-db", "", &[], true),
    MediaType::new("application/vnd.mcd", "", &["mcd"], true),
    MediaType::new("application/vnd.medcalcdata", "", &["mc1"], true),
    MediaType::new("application/vnd.mediastation.cdkey", "", &["cdkey"], true),
    MediaType::new("application/vnd.meridian-slingshot", "", &[], true),
    MediaType::new("application/vnd.mfer", "", &["mwf"], false),
    MediaType::new("application/vnd.mfmp", "", &["mfm"], true),
    MediaType::new("application/vnd.micro+json", "application/json", &[], true),
    MediaType::new("application/vnd.micrografx.flo", "", &["flo"], true),
    MediaType::new("application/vnd.micrografx.igx", "", &["igx"], true),
    MediaType::new("application/vnd.microsoft.portable-executable", "", &[], true),
    MediaType::new("application/vnd.microsoft.windows.thumbnail-cache", "", &[], true),
    MediaType::new("application/vnd.miele+json", "application/json", &[], true),
    MediaType::new("application/vnd.mif", "", &["mif"], true),
    MediaType::new("application/vnd.minisoft-hp3000-save", "", &[], true),
    MediaType::new("application/vnd.mitsubishi.misty-guard.trustweb", "", &[], true),
    MediaType::new("application/vnd.mobius.plc", "", &["plc"], false),
    MediaType::new("application/vnd.mobius.txf", "", &["txf"], false),
    MediaType::new("application/vnd.mophun.application", "", &["mpn"], true),
    MediaType::new("application/vnd.mophun.certificate", "", &["mpc"], true),
    MediaType::new("application/vnd.motorola.flexsuite", "", &[], true),
    MediaType::new("application/vnd.motorola.flexsuite.adsi", "", &[], true),
    MediaType::new("application/vnd.motorola.flexsuite.fis", "", &[], true),
    MediaType::new("application/vnd.motorola.flexsuite.gotap", "", &[], true),
    MediaType::new("application/vnd.motorola.flexsuite.kmr", "", &[], true),
    MediaType::new("application/vnd.motorola.flexsuite.ttc", "", &[], true),
    MediaType::new("application/vnd.motorola.flexsuite.wem", "", &[], true),
    MediaType::new("application/vnd.motorola.iprm", "", &[], true),
    MediaType::new("application/vnd.mozilla.xul+xml", "text/xml", &["xul"], true),
    MediaType::new("application/vnd.ms-3mfdocument", "", &[], true),
    MediaType::new("application/vnd.ms-PrintDeviceCapabilities+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.ms-PrintSchemaTicket+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.ms-artgalry", "", &["cil"], true),
    MediaType::new("application/vnd.ms-asf", "", &[], true),
    MediaType::new("application/vnd.ms-cab-compressed", "", &["cab"], true),
    MediaType::new("application/vnd.ms-color.iccprofile", "", &[], false),
    MediaType::new("application/vnd.ms-excel", "", &["xls", "xlm", "xla", "xlc", "xlt", "xlb", "xll", "xlw"], true),
    MediaType::new("application/vnd.ms-excel.addin.macroEnabled.12", "", &["xlam"], true),
    MediaType::new("application/vnd.ms-excel.sheet.binary.macroEnabled.12", "", &["xlsb"], true),
    MediaType::new("application/vnd.ms-excel.sheet.macroEnabled.12", "", &["xlsm"], true),
    MediaType::new("application/vnd.ms-excel.template.macroenabled.12", "", &["xltm"], false),
    MediaType::new("application/vnd.ms-fontobject", "", &["eot"], true),
    MediaType::new("application/vnd.ms-htmlhelp", "", &["chm"], true),
    MediaType::new("application/vnd.ms-ims", "", &["ims"], true),
    MediaType::new("application/vnd.ms-lrm", "", &["lrm"], true),
    MediaType::new("application/vnd.ms-office.activeX+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.ms-officetheme", "", &["thmx"], true),
    MediaType::new("application/vnd.ms-opentype", "", &[], false),
    MediaType::new("application/vnd.ms-outlook", "", &["msg"], false),
    MediaType::new("application/vnd.ms-package.obfuscated-opentype", "", &[], false),
    MediaType::new("application/vnd.ms-pki.certstore", "", &["sst"], false),
    MediaType::new("application/vnd.ms-pki.pko", "", &["pko"], false),
    MediaType::new("application/vnd.ms-pki.seccat", "", &["cat"], false),
    MediaType::new("application/vnd.ms-pki.stl", "", &["stl"], false),
    MediaType::new("application/vnd.ms-pkicertstore", "", &["sst"], false),
    MediaType::new("application/vnd.ms-pkiseccat", "", &["cat"], false),
    MediaType::new("application/vnd.ms-pkistl", "", &["stl"], false),
    MediaType::new("application/vnd.ms-playready.initiator+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.ms-powerpoint", "", &["ppt", "pps", "pot", "ppa", "pwz"], true),
    MediaType::new("application/vnd.ms-powerpoint.addin.macroEnabled.12", "", &["ppam"], true),
    MediaType::new("application/vnd.ms-powerpoint.presentation.macroEnabled.12", "", &["pptm", "potm"], true),
    MediaType::new("application/vnd.ms-powerpoint.slide.macroEnabled.12", "", &["sldm"], true),
    MediaType::new("application/vnd.ms-powerpoint.slideshow.macroenabled.12", "", &["ppsm"], false),
    MediaType::new("application/vnd.ms-powerpoint.template.macroEnabled.12", "", &["potm"], true),
    MediaType::new("application/vnd.ms-printing.printticket+xml", "text/xml", &[], false),
    MediaType::new("application/vnd.ms-project", "", &["mpp", "mpt"], true),
    MediaType::new("application/vnd.ms-tnef", "", &[], true),
    MediaType::new("application/vnd.ms-windows.devicepairing", "", &[], true),
    MediaType::new("application/vnd.ms-windows.nwprinting.oob", "", &[], true),
    MediaType::new("application/vnd.ms-windows.printerpairing", "", &[], true),
    MediaType::new("application/vnd.ms-windows.wsd.oob", "", &[], true),
    MediaType::new("application/vnd.ms-wmdrm.lic-chlg-req", "", &[], true),
    MediaType::new("application/vnd.ms-wmdrm.lic-resp", "", &[], true),
    MediaType::new("application/vnd.ms-wmdrm.meter-chlg-req", "", &[], true),
    MediaType::new("application/vnd.ms-wmdrm.meter-resp", "", &[], true),
    MediaType::new("application/vnd.ms-word.document.macroenabled.12", "", &["docm"], false),
    MediaType::new("application/vnd.ms-word.template.macroEnabled.12", "", &["dotm"], true),
    MediaType::new("application/vnd.ms-works", "", &["wps", "wks", "wcm", "wdb"], true),
    MediaType::new("application/vnd.ms-wpl", "", &["wpl"], true),
    MediaType::new("application/vnd.ms-xpsdocument", "", &["xps"], true),
    MediaType::new("application/vnd.msa-disk-image", "", &[], true),
    MediaType::new("application/vnd.mseq", "", &["mseq"], true),
    MediaType::new("application/vnd.msign", "", &[], true),
    MediaType::new("application/vnd.multiad.creator", "", &[], true),
    MediaType::new("application/vnd.multiad.creator.cif", "", &[], true),
    MediaType::new("application/vnd.music-niff", "", &[], true),
    MediaType::new("application/vnd.musician", "", &["mus"], true),
    MediaType::new("application/vnd.muvee.style", "", &["msty"], true),
    MediaType::new("application/vnd.mynfc", "", &["taglet"], true),
    MediaType::new("application/vnd.nacamar.ybrid+json", "application/json", &[], true),
    MediaType::new("application/vnd.ncd.control", "", &[], true),
    MediaType::new("application/vnd.ncd.reference", "", &[], true),
    MediaType::new("application/vnd.nearst.inv+json", "application/json", &[], true),
    MediaType::new("application/vnd.nebumind.line", "", &[], true),
    MediaType::new("application/vnd.nervana", "", &[], true),
    MediaType::new("application/vnd.netfpx", "", &[], true),
    MediaType::new("application/vnd.neurolanguage.nlu", "", &["nlu"], true),
    MediaType::new("application/vnd.nimn", "", &[], true),
    MediaType::new("application/vnd.nintendo.nitro.rom", "", &[], true),
    MediaType::new("application/vnd.nintendo.snes.rom", "", &[], true),
    MediaType::new("application/vnd.nitf", "", &["ntf", "nitf"], true),
    MediaType::new("application/vnd.noblenet-directory", "", &["nnd"], true),
    MediaType::new("application/vnd.noblenet-sealer", "", &["nns"], true),
    MediaType::new("application/vnd.noblenet-web", "", &["nnw"], true),
    MediaType::new("application/vnd.nokia.catalogs", "", &[], true),
    MediaType::new("application/vnd.nokia.configuration-message", "", &["ncm"], false),
    MediaType::new("application/vnd.nokia.conml+wbxml", "application/vnd.wap.wbxml", &[], true),
    MediaType::new("application/vnd.nokia.conml+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.nokia.iSDS-radio-presets", "", &[], true),
    MediaType::new("application/vnd.nokia.iptv.config+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.nokia.landmark+wbxml", "application/vnd.wap.wbxml", &[], true),
    MediaType::new("application/vnd.nokia.landmark+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.nokia.landmarkcollection+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.nokia.n-gage.ac+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.nokia.n-gage.data", "", &["ngdat"], true),
    MediaType::new("application/vnd.nokia.n-gage.symbian.install", "", &["n-gage"], true),
    MediaType::new("application/vnd.nokia.ncd", "", &[], true),
    MediaType::new("application/vnd.nokia.pcd+wbxml", "application/vnd.wap.wbxml", &[], true),
    MediaType::new("application/vnd.nokia.pcd+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.nokia.radio-preset", "", &["rpst"], true),
    MediaType::new("application/vnd.nokia.radio-presets", "", &["rpss"], true),
    MediaType::new("application/vnd.nokia.ringing-tone", "", &["rng"], false),
    MediaType::new("application/vnd.novadigm.EDX", "", &["edx"], true),
    MediaType::new("application/vnd.novadigm.EXT", "", &["ext"], true),
    MediaType::new("application/vnd.novadigm.edm", "", &["edm"], false),
    MediaType::new("application/vnd.ntt-local.content-share", "", &[], true),
    MediaType::new("application/vnd.ntt-local.file-transfer", "", &[], true),
    MediaType::new("application/vnd.ntt-local.ogw_remote-access", "", &[], true),
    MediaType::new("application/vnd.ntt-local.sip-ta_remote", "", &[], true),
    MediaType::new("application/vnd.ntt-local.sip-ta_tcp_stream", "", &[], true),
    MediaType::new("application/vnd.oasis.opendocument.base", "", &[], true),
    MediaType::new("application/vnd.oasis.opendocument.chart", "", &["odc"], true),
    MediaType::new("application/vnd.oasis.opendocument.chart-template", "", &["otc"], true),
    MediaType::new("application/vnd.oasis.opendocument.database", "", &["odb"], true),
    MediaType::new("application/vnd.oasis.opendocument.formula", "", &["odf"], true),
    MediaType::new("application/vnd.oasis.opendocument.formula-template", "", &["odft"], true),
    MediaType::new("application/vnd.oasis.opendocument.graphics", "", &["odg"], true),
    MediaType::new("application/vnd.oasis.opendocument.graphics-template", "", &["otg"], true),
    MediaType::new("application/vnd.oasis.opendocument.image", "", &["odi"], true),
    MediaType::new("application/vnd.oasis.opendocument.image-template", "", &["oti"], true),
    MediaType::new("application/vnd.oasis.opendocument.presentation", "", &["odp"], true),
    MediaType::new("application/vnd.oasis.opendocument.presentation-template", "", &["otp"], true),
    MediaType::new("application/vnd.oasis.opendocument.spreadsheet", "", &["ods"], true),
    MediaType::new("application/vnd.oasis.opendocument.spreadsheet-template", "", &["ots"], true),
    MediaType::new("application/vnd.oasis.opendocument.text", "", &["odt"], true),
    MediaType::new("application/vnd.oasis.opendocument.text-master", "", &["odm", "otm"], true),
    MediaType::new("application/vnd.oasis.opendocument.text-template", "", &["ott"], true),
    MediaType::new("application/vnd.oasis.opendocument.text-web", "", &["oth"], true),
    MediaType::new("application/vnd.obn", "", &[], true),
    MediaType::new("application/vnd.ocf+cbor", "application/cbor", &[], true),
    MediaType::new("application/vnd.oci.image.manifest.v1+json", "application/json", &[], true),
    MediaType::new("application/vnd.oftn.l10n+json", "application/json", &[], true),
    MediaType::new("application/vnd.oipf.contentaccessdownload+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.oipf.contentaccessstreaming+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.oipf.cspg-hexbinary", "", &[], true),
    MediaType::new("application/vnd.oipf.dae.svg+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.oipf.dae.xhtml+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.oipf.mippvcontrolmessage+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.oipf.pae.gem", "", &[], true),
    MediaType::new("application/vnd.oipf.spdiscovery+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.oipf.spdlist+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.oipf.ueprofile+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.oipf.userprofile+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.olpc-sugar", "", &["xo"], true),
    MediaType::new("application/vnd.oma-scws-config", "", &[], true),
    MediaType::new("application/vnd.oma-scws-http-request", "", &[], true),
    MediaType::new("application/vnd.oma-scws-http-response", "", &[], true),
    MediaType::new("application/vnd.oma.bcast.associated-procedure-parameter+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.oma.bcast.drm-trigger+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.oma.bcast.imd+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.oma.bcast.ltkm", "", &[], true),
    MediaType::new("application/vnd.oma.bcast.notification+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.oma.bcast.provisioningtrigger", "", &[], true),
    MediaType::new("application/vnd.oma.bcast.sgboot", "", &[], true),
    MediaType::new("application/vnd.oma.bcast.sgdd+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.oma.bcast.sgdu", "", &[], true),
    MediaType::new("application/vnd.oma.bcast.simple-symbol-container", "", &[], true),
    MediaType::new("application/vnd.oma.bcast.smartcard-trigger+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.oma.bcast.sprov+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.oma.bcast.stkm", "", &[], true),
    MediaType::new("application/vnd.oma.cab-address-book+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.oma.cab-feature-handler+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.oma.cab-pcc+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.oma.cab-subs-invite+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.oma.cab-user-prefs+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.oma.dcd", "", &[], true),
    MediaType::new("application/vnd.oma.dcdc", "", &[], true),
    MediaType::new("application/vnd.oma.dd2+xml", "text/xml", &["dd2"], true),
    MediaType::new("application/vnd.oma.drm.risd+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.oma.group-usage-list+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.oma.lwm2m+cbor", "application/cbor", &[], true),
    MediaType::new("application/vnd.oma.lwm2m+json", "application/json", &[], true),
    MediaType::new("application/vnd.oma.lwm2m+tlv", "", &[], true),
    MediaType::new("application/vnd.oma.pal+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.oma.poc.detailed-progress-report+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.oma.poc.final-report+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.oma.poc.groups+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.oma.poc.invocation-descriptor+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.oma.poc.optimized-progress-report+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.oma.push", "", &[], true),
    MediaType::new("application/vnd.oma.scidm.messages+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.oma.xcap-directory+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.omads-email+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.omads-file+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.omads-folder+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.omaloc-supl-init", "", &[], true),
    MediaType::new("application/vnd.onepager", "", &[], true),
    MediaType::new("application/vnd.onepagertamp", "", &[], true),
    MediaType::new("application/vnd.onepagertamx", "", &[], true),
    MediaType::new("application/vnd.onepagertat", "", &[], true),
    MediaType::new("application/vnd.onepagertatp", "", &[], true),
    MediaType::new("application/vnd.onepagertatx", "", &[], true),
    MediaType::new("application/vnd.onvif.metadata", "", &[], true),
    MediaType::new("application/vnd.openblox.game+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.openblox.game-binary", "", &[], true),
    MediaType::new("application/vnd.openeye.oeb", "", &[], true),
    MediaType::new("application/vnd.openofficeorg.extension", "", &["oxt"], false),
    MediaType::new("application/vnd.openstreetmap.data+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.opentimestamps.ots", "", &[], true),
    MediaType::new("application/vnd.openxmlformats-officedocument.custom-properties+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.openxmlformats-officedocument.customXmlProperties+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.openxmlformats-officedocument.drawing+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.openxmlformats-officedocument.drawingml.chart+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.openxmlformats-officedocument.drawingml.chartshapes+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.openxmlformats-officedocument.drawingml.diagramLayout+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.openxmlformats-officedocument.drawingml.diagramcolors+xml", "text/xml", &[], false),
    MediaType::new("application/vnd.openxmlformats-officedocument.drawingml.diagramdata+xml", "text/xml", &[], false),
    MediaType::new("application/vnd.openxmlformats-officedocument.drawingml.diagramstyle+xml", "text/xml", &[], false),
    MediaType::new("application/vnd.openxmlformats-officedocument.extended-properties+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.openxmlformats-officedocument.presentationml.commentauthors+xml", "text/xml", &[], false),
    MediaType::new("application/vnd.openxmlformats-officedocument.presentationml.comments+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.openxmlformats-officedocument.presentationml.handoutmaster+xml", "text/xml", &[], false),
    MediaType::new("application/vnd.openxmlformats-officedocument.presentationml.notesMaster+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.openxmlformats-officedocument.presentationml.notesSlide+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.openxmlformats-officedocument.presentationml.presentation", "", &["pptx"], true),
    MediaType::new("application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.openxmlformats-officedocument.presentationml.presprops+xml", "text/xml", &[], false),
    MediaType::new("application/vnd.openxmlformats-officedocument.presentationml.slide", "", &["sldx"], true),
    MediaType::new("application/vnd.openxmlformats-officedocument.presentationml.slide+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.openxmlformats-officedocument.presentationml.slideMaster+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.openxmlformats-officedocument.presentationml.slideUpdateInfo+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.openxmlformats-officedocument.presentationml.slidelayout+xml", "text/xml", &[], false),
    MediaType::new("application/vnd.openxmlformats-officedocument.presentationml.slideshow", "", &["ppsx"], true),
    MediaType::new("application/vnd.openxmlformats-officedocument.presentationml.slideshow.main+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.openxmlformats-officedocument.presentationml.tableStyles+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.openxmlformats-officedocument.presentationml.tags+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.openxmlformats-officedocument.presentationml.template", "", &["potx"], true),
    MediaType::new("application/vnd.openxmlformats-officedocument.presentationml.template.main+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.openxmlformats-officedocument.presentationml.viewProps+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.openxmlformats-officedocument.spreadsheetml.calcChain+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.openxmlformats-officedocument.spreadsheetml.chartsheet+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.openxmlformats-officedocument.spreadsheetml.comments+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.openxmlformats-officedocument.spreadsheetml.connections+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.openxmlformats-officedocument.spreadsheetml.dialogsheet+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.openxmlformats-officedocument.spreadsheetml.externalLink+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.openxmlformats-officedocument.spreadsheetml.pivotCacheRecords+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.openxmlformats-officedocument.spreadsheetml.pivotTable+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.openxmlformats-officedocument.spreadsheetml.pivotcachedefinition+xml", "text/xml", &[], false),
    MediaType::new("application/vnd.openxmlformats-officedocument.spreadsheetml.querytable+xml", "text/xml", &[], false),
    MediaType::new("application/vnd.openxmlformats-officedocument.spreadsheetml.revisionheaders+xml", "text/xml", &[], false),
    MediaType::new("application/vnd.openxmlformats-officedocument.spreadsheetml.revisionlog+xml", "text/xml", &[], false),
    MediaType::new("application/vnd.openxmlformats-officedocument.spreadsheetml.sharedstrings+xml", "text/xml", &[], false),
    MediaType::new("application/vnd.openxmlformats-officedocument.spreadsheetml.sheet", "", &["xlsx"], true),
    MediaType::new("application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.openxmlformats-officedocument.spreadsheetml.sheetMetadata+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.openxmlformats-officedocument.spreadsheetml.styles+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.openxmlformats-officedocument.spreadsheetml.table+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.openxmlformats-officedocument.spreadsheetml.tableSingleCells+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.openxmlformats-officedocument.spreadsheetml.template", "", &["xltx"], true),
    MediaType::new("application/vnd.openxmlformats-officedocument.spreadsheetml.template.main+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.openxmlformats-officedocument.spreadsheetml.usernames+xml", "text/xml", &[], false),
    MediaType::new("application/vnd.openxmlformats-officedocument.spreadsheetml.volatiledependencies+xml", "text/xml", &[], false),
    MediaType::new("application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.openxmlformats-officedocument.theme+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.openxmlformats-officedocument.themeoverride+xml", "text/xml", &[], false),
    MediaType::new("application/vnd.openxmlformats-officedocument.vmlDrawing", "", &[], true),
    MediaType::new("application/vnd.openxmlformats-officedocument.wordprocessingml.comments+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.openxmlformats-officedocument.wordprocessingml.document", "", &["docx"], true),
    MediaType::new("application/vnd.openxmlformats-officedocument.wordprocessingml.document.glossary+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.openxmlformats-officedocument.wordprocessingml.endnotes+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.openxmlformats-officedocument.wordprocessingml.fontTable+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.openxmlformats-officedocument.wordprocessingml.footer+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.openxmlformats-officedocument.wordprocessingml.footnotes+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.openxmlformats-officedocument.wordprocessingml.numbering+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.openxmlformats-officedocument.wordprocessingml.settings+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.openxmlformats-officedocument.wordprocessingml.template", "", &["dotx"], true),
    MediaType::new("application/vnd.openxmlformats-officedocument.wordprocessingml.template.main+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.openxmlformats-officedocument.wordprocessingml.websettings+xml", "text/xml", &[], false),
    MediaType::new("application/vnd.openxmlformats-package.core-properties+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.openxmlformats-package.digital-signature-xmlsignature+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.openxmlformats-package.relationships+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.oracle.resource+json", "application/json", &[], true),
    MediaType::new("application/vnd.orange.indata", "", &[], true),
    MediaType::new("application/vnd.osa.netdeploy", "", &[], true),
    MediaType::new("application/vnd.osgeo.mapguide.package", "", &["mgp"], true),
    MediaType::new("application/vnd.osgi.bundle", "", &[], true),
    MediaType::new("application/vnd.osgi.dp", "", &["dp"], true),
    MediaType::new("application/vnd.osgi.subsystem", "", &["esa"], true),
    MediaType::new("application/vnd.otps.ct-kip+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.oxli.countgraph", "", &[], true),
    MediaType::new("application/vnd.pagerduty+json", "application/json", &[], true),
    MediaType::new("application/vnd.palm", "", &["pdb", "pqa", "oprc"], true),
    MediaType::new("application/vnd.panoply", "", &[], true),
    MediaType::new("application/vnd.paos.xml", "", &[], true),
    MediaType::new("application/vnd.patentdive", "", &[], true),
    MediaType::new("application/vnd.patientecommsdoc", "", &[], true),
    MediaType::new("application/vnd.pawaafile", "", &["paw"], true),
    MediaType::new("application/vnd.pcos", "", &[], true),
    MediaType::new("application/vnd.pg.format", "", &["str"], true),
    MediaType::new("application/vnd.pg.osasli", "", &["ei6"], true),
    MediaType::new("application/vnd.piaccess.application-licence", "", &[], true),
    MediaType::new("application/vnd.picsel", "", &["efif"], true),
    MediaType::new("application/vnd.pmi.widget", "", &["wg"], true),
    MediaType::new("application/vnd.poc.group-advertisement+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.pocketlearn", "", &["plf"], true),
    MediaType::new("application/vnd.powerbuilder6", "", &["pbd"], true),
    MediaType::new("application/vnd.powerbuilder6-s", "", &[], true),
    MediaType::new("application/vnd.powerbuilder7", "", &[], true),
    MediaType::new("application/vnd.powerbuilder7-s", "", &[], true),
    MediaType::new("application/vnd.powerbuilder75", "", &[], true),
    MediaType::new("application/vnd.powerbuilder75-s", "", &[], true),
    MediaType::new("application/vnd.preminet", "", &[], true),
    MediaType::new("application/vnd.previewsystems.box", "", &["box"], true),
    MediaType::new("application/vnd.proteus.magazine", "", &["mgz"], true),
    MediaType::new("application/vnd.psfs", "", &[], true),
    MediaType::new("application/vnd.publishare-delta-tree", "", &["qps"], true),
    MediaType::new("application/vnd.pvi.ptid1", "", &["ptid"], true),
    MediaType::new("application/vnd.pwg-multiplexed", "", &[], true),
    MediaType::new("application/vnd.pwg-xhtml-print+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.qualcomm.brew-app-res", "", &[], true),
    MediaType::new("application/vnd.quarantainenet", "", &[], true),
    MediaType::new("application/vnd.quobject-quoxdocument", "", &[], true),
    MediaType::new("application/vnd.radisys.moml+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.radisys.msml+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.radisys.msml-audit+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.radisys.msml-audit-conf+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.radisys.msml-audit-conn+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.radisys.msml-audit-dialog+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.radisys.msml-audit-stream+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.radisys.msml-conf+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.radisys.msml-dialog+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.radisys.msml-dialog-base+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.radisys.msml-dialog-fax-detect+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.radisys.msml-dialog-fax-sendrecv+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.radisys.msml-dialog-group+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.radisys.msml-dialog-speech+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.radisys.msml-dialog-transform+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.rainstor.data", "", &[], true),
    MediaType::new("application/vnd.rapid", "", &[], true),
    MediaType::new("application/vnd.rar", "", &[], true),
    MediaType::new("application/vnd.realvnc.bed", "", &["bed"], true),
    MediaType::new("application/vnd.recordare.musicxml", "", &["mxl"], true),
    MediaType::new("application/vnd.recordare.musicxml+xml", "text/xml", &["musicxml"], true),
    MediaType::new("application/vnd.renlearn.rlprint", "", &[], false),
    MediaType::new("application/vnd.resilient.logic", "", &[], true),
    MediaType::new("application/vnd.restful+json", "application/json", &[], true),
    MediaType::new("application/vnd.rig.cryptonote", "", &["cryptonote"], true),
    MediaType::new("application/vnd.rim.cod", "", &["cod"], false),
    MediaType::new("application/vnd.rn-realmedia", "", &["rm"], false),
    MediaType::new("application/vnd.rn-realmedia-vbr", "", &["rmvb"], false),
    MediaType::new("application/vnd.rn-realplayer", "", &["rnx"], false),
    MediaType::new("application/vnd.route66.link66+xml", "text/xml", &["link66"], true),
    MediaType::new("application/vnd.rs-274x", "", &[], true),
    MediaType::new("application/vnd.ruckus.download", "", &[], true),
    MediaType::new("application/vnd.s3sms", "", &[], true),
    MediaType::new("application/vnd.sailingtracker.track", "", &["st"], true),
    MediaType::new("application/vnd.sar", "", &[], true),
    MediaType::new("application/vnd.sbm.cid", "", &[], true),
    MediaType::new("application/vnd.sbm.mid2", "", &[], true),
    MediaType::new("application/vnd.scribus", "", &[], true),
    MediaType::new("application/vnd.sealed.3df", "", &[], true),
    MediaType::new("application/vnd.sealed.csf", "", &[], true),
    MediaType::new("application/vnd.sealed.doc", "", &[], true),
    MediaType::new("application/vnd.sealed.eml", "", &[], true),
    MediaType::new("application/vnd.sealed.mht", "", &[], true),
    MediaType::new("application/vnd.sealed.net", "", &[], true),
    MediaType::new("application/vnd.sealed.ppt", "", &[], true),
    MediaType::new("application/vnd.sealed.tiff", "", &[], true),
    MediaType::new("application/vnd.sealed.xls", "", &[], true),
    MediaType::new("application/vnd.sealedmedia.softseal.html", "", &[], true),
    MediaType::new("application/vnd.sealedmedia.softseal.pdf", "", &[], true),
    MediaType::new("application/vnd.seemail", "", &["see"], true),
    MediaType::new("application/vnd.seis+json", "application/json", &[], true),
    MediaType::new("application/vnd.sema", "", &["sema"], true),
    MediaType::new("application/vnd.semd", "", &["semd"], true),
    MediaType::new("application/vnd.semf", "", &["semf"], true),
    MediaType::new("application/vnd.shade-save-file", "", &[], true),
    MediaType::new("application/vnd.shana.informed.formdata", "", &["ifm"], true),
    MediaType::new("application/vnd.shana.informed.formtemplate", "", &["itp"], true),
    MediaType::new("application/vnd.shana.informed.interchange", "", &["iif"], true),
    MediaType::new("application/vnd.shana.informed.package", "", &["ipk"], true),
    MediaType::new("application/vnd.shootproof+json", "application/json", &[], true),
    MediaType::new("application/vnd.shopkick+json", "application/json", &[], true),
    MediaType::new("application/vnd.shp", "", &[], true),
    MediaType::new("application/vnd.shx", "", &[], true),
    MediaType::new("application/vnd.sigrok.session", "", &[], true),
    MediaType::new("application/vnd.siren+json", "application/json", &[], true),
    MediaType::new("application/vnd.smaf", "", &["mmf"], true),
    MediaType::new("application/vnd.smart.notebook", "", &[], true),
    MediaType::new("application/vnd.smart.teacher", "", &["teacher"], true),
    MediaType::new("application/vnd.snesdev-page-table", "", &[], true),
    MediaType::new("application/vnd.software602.filler.form+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.software602.filler.form-xml-zip", "", &[], true),
    MediaType::new("application/vnd.solent.sdkm+xml", "text/xml", &["sdkm", "sdkd"], true),
    MediaType::new("application/vnd.spotfire.dxp", "", &["dxp"], true),
    MediaType::new("application/vnd.spotfire.sfs", "", &["sfs"], true),
    MediaType::new("application/vnd.sqlite3", "", &[], true),
    MediaType::new("application/vnd.sss-cod", "", &[], true),
    MediaType::new("application/vnd.sss-dtf", "", &[], true),
    MediaType::new("application/vnd.sss-ntf", "", &[], true),
    MediaType::new("application/vnd.stardivision.calc", "", &["sdc"], false),
    MediaType::new("application/vnd.stardivision.draw", "", &["sda"], false),
    MediaType::new("application/vnd.stardivision.impress", "", &["sdd", "sdp"], false),
    MediaType::new("application/vnd.stardivision.math", "", &["smf"], false),
    MediaType::new("application/vnd.stardivision.writer", "", &["sdw", "vor"], false),
    MediaType::new("application/vnd.stardivision.writer-global", "", &["sgl"], false),
    MediaType::new("application/vnd.stepmania.package", "", &["smzip"], true),
    MediaType::new("application/vnd.stepmania.stepchart", "", &["sm"], true),
    MediaType::new("application/vnd.street-stream", "", &[], true),
    MediaType::new("application/vnd.sun.wadl+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.sun.xml.calc", "", &["sxc"], false),
    MediaType::new("application/vnd.sun.xml.calc.template", "", &["stc"], false),
    MediaType::new("application/vnd.sun.xml.draw", "", &["sxd"], false),
    MediaType::new("application/vnd.sun.xml.draw.template", "", &["std"], false),
    MediaType::new("application/vnd.sun.xml.impress", "", &["sxi"], false),
    MediaType::new("application/vnd.sun.xml.impress.template", "", &["sti"], false),
    MediaType::new("application/vnd.sun.xml.math", "", &["sxm"], false),
    MediaType::new("application/vnd.sun.xml.writer", "", &["sxw"], false),
    MediaType::new("application/vnd.sun.xml.writer.global", "", &["sxg"], false),
    MediaType::new("application/vnd.sun.xml.writer.template", "", &["stw"], false),
    MediaType::new("application/vnd.sus-calendar", "", &["sus", "susp"], true),
    MediaType::new("application/vnd.svd", "", &["svd"], true),
    MediaType::new("application/vnd.swiftview-ics", "", &[], true),
    MediaType::new("application/vnd.sybyl.mol2", "", &[], true),
    MediaType::new("application/vnd.sycle+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.syft+json", "application/json", &[], true),
    MediaType::new("application/vnd.symbian.install", "", &["sis", "sisx"], false),
    MediaType::new("application/vnd.syncml+xml", "text/xml", &["xsm"], true),
    MediaType::new("application/vnd.syncml.dm+wbxml", "application/vnd.wap.wbxml", &["bdm"], true),
    MediaType::new("application/vnd.syncml.dm+xml", "text/xml", &["xdm"], true),
    MediaType::new("application/vnd.syncml.dm.notification", "", &[], true),
    MediaType::new("application/vnd.syncml.dmddf+wbxml", "application/vnd.wap.wbxml", &[], true),
    MediaType::new("application/vnd.syncml.dmddf+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.syncml.dmtnds+wbxml", "application/vnd.wap.wbxml", &[], true),
    MediaType::new("application/vnd.syncml.dmtnds+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.syncml.ds.notification", "", &[], true),
    MediaType::new("application/vnd.tableschema+json", "application/json", &[], true),
    MediaType::new("application/vnd.tao.intent-module-archive", "", &["tao"], true),
    MediaType::new("application/vnd.tcpdump.pcap", "", &["pcap", "cap", "dmp"], true),
    MediaType::new("application/vnd.think-cell.ppttc+json", "application/json", &[], true),
    MediaType::new("application/vnd.tmd.mediaflex.api+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.tml", "", &[], true),
    MediaType::new("application/vnd.tmobile-livetv", "", &["tmo"], true),
    MediaType::new("application/vnd.tri.onesource", "", &[], true),
    MediaType::new("application/vnd.trid.tpt", "", &["tpt"], true),
    MediaType::new("application/vnd.triscape.mxs", "", &["mxs"], true),
    MediaType::new("application/vnd.trueapp", "", &["tra"], true),
    MediaType::new("application/vnd.truedoc", "", &[], true),
    MediaType::new("application/vnd.tve-trigger", "", &[], false),
    MediaType::new("application/vnd.ubisoft.webplayer", "", &[], true),
    MediaType::new("application/vnd.ufdl", "", &["ufd", "ufdl"], true),
    MediaType::new("application/vnd.uiq.theme", "", &["utz"], true),
    MediaType::new("application/vnd.umajin", "", &["umj"], true),
    MediaType::new("application/vnd.unity", "", &["unityweb"], true),
    MediaType::new("application/vnd.uoml+xml", "text/xml", &["uoml"], true),
    MediaType::new("application/vnd.uplanet.alert", "", &[], true),
    MediaType::new("application/vnd.uplanet.alert-wbxml", "", &[], true),
    MediaType::new("application/vnd.uplanet.bearer-choice", "", &[], true),
    MediaType::new("application/vnd.uplanet.bearer-choice-wbxml", "", &[], true),
    MediaType::new("application/vnd.uplanet.cacheop", "", &[], true),
    MediaType::new("application/vnd.uplanet.cacheop-wbxml", "", &[], true),
    MediaType::new("application/vnd.uplanet.channel", "", &[], true),
    MediaType::new("application/vnd.uplanet.channel-wbxml", "", &[], true),
    MediaType::new("application/vnd.uplanet.list", "", &[], true),
    MediaType::new("application/vnd.uplanet.list-wbxml", "", &[], true),
    MediaType::new("application/vnd.uplanet.listcmd", "", &[], true),
    MediaType::new("application/vnd.uplanet.listcmd-wbxml", "", &[], true),
    MediaType::new("application/vnd.uplanet.signal", "", &[], true),
    MediaType::new("application/vnd.uri-map", "", &[], true),
    MediaType::new("application/vnd.valve.source.material", "", &[], true),
    MediaType::new("application/vnd.vcx", "", &["vcx"], true),
    MediaType::new("application/vnd.vd-study", "", &[], true),
    MediaType::new("application/vnd.vectorworks", "", &[], true),
    MediaType::new("application/vnd.vel+json", "application/json", &[], true),
    MediaType::new("application/vnd.verimatrix.vcas", "", &[], true),
    MediaType::new("application/vnd.veritone.aion+json", "application/json", &[], true),
    MediaType::new("application/vnd.veryant.thin", "", &[], true),
    MediaType::new("application/vnd.ves.encrypted", "", &[], true),
    MediaType::new("application/vnd.vidsoft.vidconference", "", &[], true),
    MediaType::new("application/vnd.visio", "", &["vsd", "vst", "vss", "vsw"], true),
    MediaType::new("application/vnd.visionary", "", &["vis"], true),
    MediaType::new("application/vnd.vividence.scriptfile", "", &[], true),
    MediaType::new("application/vnd.vsf", "", &["vsf"], true),
    MediaType::new("application/vnd.wap.sic", "", &["sic"], true),
    MediaType::new("application/vnd.wap.slc", "", &["slc"], true),
    MediaType::new("application/vnd.wap.wbxml", "", &["wbxml"], true),
    MediaType::new("application/vnd.wap.wmlc", "", &["wmlc"], true),
    MediaType::new("application/vnd.wap.wmlscriptc", "", &["wmlsc"], true),
    MediaType::new("application/vnd.wasmflow.wafl", "", &[], true),
    MediaType::new("application/vnd.webturbo", "", &["wtb"], true),
    MediaType::new("application/vnd.wfa.dpp", "", &[], true),
    MediaType::new("application/vnd.wfa.p2p", "", &[], true),
    MediaType::new("application/vnd.wfa.wsc", "", &[], true),
    MediaType::new("application/vnd.windows.devicepairing", "", &[], true),
    MediaType::new("application/vnd.wmc", "", &[], true),
    MediaType::new("application/vnd.wmf.bootstrap", "", &[], true),
    MediaType::new("application/vnd.wolfram.mathematica", "", &[], true),
    MediaType::new("application/vnd.wolfram.mathematica.package", "", &[], true),
    MediaType::new("application/vnd.wolfram.player", "", &["nbp"], true),
    MediaType::new("application/vnd.wordperfect", "", &["wpd"], true),
    MediaType::new("application/vnd.wqd", "", &["wqd"], true),
    MediaType::new("application/vnd.wrq-hp3000-labelled", "", &[], true),
    MediaType::new("application/vnd.wt.stf", "", &["stf"], true),
    MediaType::new("application/vnd.wv.csp+wbxml", "application/vnd.wap.wbxml", &[], true),
    MediaType::new("application/vnd.wv.csp+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.wv.ssp+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.xacml+json", "application/json", &[], true),
    MediaType::new("application/vnd.xara", "", &["xar", "web"], true),
    MediaType::new("application/vnd.xfdl", "", &["xfdl"], true),
    MediaType::new("application/vnd.xfdl.webform", "", &[], true),
    MediaType::new("application/vnd.xmi+xml", "text/xml", &[], true),
    MediaType::new("application/vnd.xmpie.cpkg", "", &[], true),
    MediaType::new("application/vnd.xmpie.dpkg", "", &[], true),
    MediaType::new("application/vnd.xmpie.plan", "", &[], true),
    MediaType::new("application/vnd.xmpie.ppkg", "", &[], true),
    MediaType::new("application/vnd.xmpie.xlim", "", &[], true),
    MediaType::new("application/vnd.yamaha.hv-dic", "", &["hvd"], true),
    MediaType::new("application/vnd.yamaha.hv-script", "", &["hvs"], true),
    MediaType::new("application/vnd.yamaha.hv-voice", "", &["hvp"], true),
    MediaType::new("application/vnd.yamaha.openscoreformat", "", &["osf"], true),
    MediaType::new("application/vnd.yamaha.openscoreformat.osfpvg+xml", "text/xml", &["osfpvg"], true),
    MediaType::new("application/vnd.yamaha.remote-setup", "", &[], true),
    MediaType::new("application/vnd.yamaha.smaf-audio", "", &["saf"], true),
    MediaType::new("application/vnd.yamaha.smaf-phrase", "", &["spf"], true),
    MediaType::new("application/vnd.yamaha.through-ngn", "", &[], true),
    MediaType::new("application/vnd.yamaha.tunnel-udpencap", "", &[], true),
    MediaType::new("application/vnd.yaoweme", "", &[], true),
    MediaType::new("application/vnd.yellowriver-custom-menu", "", &["cmp"], true),
    MediaType::new("application/vnd.youtube.yt", "", &[], true),
    MediaType::new("application/vnd.zul", "", &["zir", "zirz"], true),
    MediaType::new("application/vnd.zzazz.deck+xml", "text/xml", &["zaz"], true),
    MediaType::new("application/vocaltec-media-desc", "", &["vmd"], false),
    MediaType::new("application/vocaltec-media-file", "", &["vmf"], false),
    MediaType::new("application/voicexml+xml", "text/xml", &["vxml"], true),
    MediaType::new("application/voucher-cms+json", "application/json", &[], true),
    MediaType::new("application/vq-rtcpxr", "", &[], true),
    MediaType::new("application/wasm", "", &[], true),
    MediaType::new("application/watcherinfo+xml", "text/xml", &[], true),
    MediaType::new("application/webpush-options+json", "application/json", &[], true),
    MediaType::new("application/whoispp-query", "", &[], true),
    MediaType::new("application/whoispp-response", "", &[], true),
    MediaType::new("application/widget", "", &["wgt"], true),
    MediaType::new("application/winhlp", "", &["hlp"], false),
    MediaType::new("application/wita", "", &[], true),
    MediaType::new("application/wordperfect", "", &["wp", "wp5", "wp6", "wpd"], false),
    MediaType::new("application/wordperfect5.1", "", &["wp5"], true),
    MediaType::new("application/wordperfect6.0", "", &["w60", "wp5"], false),
    MediaType::new("application/wordperfect6.1", "", &["w61"], false),
    MediaType::new("application/wsdl+xml", "text/xml", &["wsdl"], true),
    MediaType::new("application/wspolicy+xml", "text/xml", &["wspolicy"], true),
    MediaType::new("application/x-123", "", &["wk1", "wk"], false),
    MediaType::new("application/x-7z-compressed", "", &["7z"], false),
    MediaType::new("application/x-abiword", "", &["abw"], false),
    MediaType::new("application/x-ace-compressed", "", &["ace"], false),
    MediaType::new("application/x-aim", "", &["aim"], false),
    MediaType::new("application/x-amf", "", &[], false),
    MediaType::new("application/x-apple-diskimage", "", &["dmg"], false),
    MediaType::new("application/x-authorware-bin", "", &["aab", "x32", "u32", "vox"], false),
    MediaType::new("application/x-authorware-map", "", &["aam"], false),
    MediaType::new("application/x-authorware-seg", "", &["aas"], false),
    MediaType::new("application/x-bcpio", "", &["bcpio"], false),
    MediaType::new("application/x-binary", "", &["bin"], false),
    MediaType::new("application/x-binhex40", "", &["hqx"], false),
    MediaType::new("application/x-bittorrent", "", &["torrent"], false),
    MediaType::new("application/x-blorb", "", &["blb", "blorb"], false),
    MediaType::new("application/x-bsh", "", &["bsh", "sh", "shar"], false),
    MediaType::new("application/x-bytecode.elisp", "", &["elc"], false),
    MediaType::new("application/x-bytecode.python", "", &["pyc"], false),
    MediaType::new("application/x-bzip", "", &["bz"], false),
    MediaType::new("application/x-bzip2", "", &["bz2", "boz"], false),
    MediaType::new("application/x-cbr", "", &["cbr", "cba", "cbt", "cbz", "cb7"], false),
    MediaType::new("application/x-cdf", "", &["cdf"], false),
    MediaType::new("application/x-cdlink", "", &["vcd"], false),
    MediaType::new("application/x-cfs-compressed", "", &["cfs"], false),
    MediaType::new("application/x-chat", "", &["chat", "cha"], false),
    MediaType::new("application/x-chess-pgn", "", &["pgn"], false),
    MediaType::new("application/x-chm", "", &["chm"], false),
    MediaType::new("application/x-chrome-extension", "", &["crx"], false),
    MediaType::new("application/x-cmu-raster", "", &["ras"], false),
    MediaType::new("application/x-cocoa", "", &["cco"], false),
    MediaType::new("application/x-compactpro", "", &["cpt"], false),
    MediaType::new("application/x-compress", "", &["z"], false),
    MediaType::new("application/x-compressed", "", &["gz", "tgz", "z", "zip"], false),
    MediaType::new("application/x-conference", "", &["nsc"], false),
    MediaType::new("application/x-core", "", &[], false),
    MediaType::new("application/x-cpio", "", &["cpio"], false),
    MediaType::new("application/x-cpt", "", &["cpt"], false),
    MediaType::new("application/x-csh", "", &["csh"], false),
    MediaType::new("application/x-debian-package", "", &["deb", "udeb"], false),
    MediaType::new("application/x-deepv", "", &["deepv"], false),
    MediaType::new("application/x-dgc-compressed", "", &["dgc"], false),
    MediaType::new("application/x-director", "", &["dir", "dcr", "dxr", "cst", "cct", "cxt", "w3d", "fgd", "swa"], false),
    MediaType::new("application/x-dms", "", &["dms"], false),
    MediaType::new("application/x-doom", "", &["wad"], false),
    MediaType::new("application/x-dtbncx+xml", "text/xml", &["ncx"], false),
    MediaType::new("application/x-dtbook+xml", "text/xml", &["dtb"], false),
    MediaType::new("application/x-dtbresource+xml", "text/xml", &["res"], false),
    MediaType::new("application/x-dvi", "", &["dvi"], false),
    MediaType::new("application/x-elc", "", &["elc"], false),
    MediaType::new("application/x-envoy", "", &["env", "evy"], false),
    MediaType::new("application/x-esrehber", "", &["es"], false),
    MediaType::new("application/x-eva", "", &["eva"], false),
    MediaType::new("application/x-excel", "", &["xla", "xlb", "xlc", "xld", "xlk", "xll", "xlm", "xls", "xlt", "xlv", "xlw"], false),
    MediaType::new("application/x-executable", "", &[], false),
    MediaType::new("application/x-flac", "", &["flac"], false),
    MediaType::new("application/x-font", "", &["pfa", "pfb", "gsf", "pcf", "pcf.z"], false),
    MediaType::new("application/x-font-bdf", "", &["bdf"], false),
    MediaType::new("application/x-font-dos", "", &[], false),
    MediaType::new("application/x-font-framemaker", "", &[], false),
    MediaType::new("application/x-font-ghostscript", "", &["gsf"], false),
    MediaType::new("application/x-font-libgrx", "", &[], false),
    MediaType::new("application/x-font-linux-psf", "", &["psf"], false),
    MediaType::new("application/x-font-otf", "", &["otf"], false),
    MediaType::new("application/x-font-pcf", "", &["pcf"], false),
    MediaType::new("application/x-font-snf", "", &["snf"], false),
    MediaType::new("application/x-font-speedo", "", &[], false),
    MediaType::new("application/x-font-sunos-news", "", &[], false),
    MediaType::new("application/x-font-ttf", "", &["ttf", "ttc"], false),
    MediaType::new("application/x-font-type1", "", &["pfa", "pfb", "pfm", "afm"], false),
    MediaType::new("application/x-font-vfont", "", &[], false),
    MediaType::new("application/x-font-woff", "", &["woff"], false),
    MediaType::new("application/x-frame", "", &["mif"], false),
    MediaType::new("application/x-freearc", "", &["arc"], false),
    MediaType::new("application/x-freelance", "", &["pre"], false),
    MediaType::new("application/x-futuresplash", "", &["spl"], false),
    MediaType::new("application/x-gca-compressed", "", &["gca"], false),
    MediaType::new("application/x-glulx", "", &["ulx"], false),
    MediaType::new("application/x-gnumeric", "", &["gnumeric"], false),
    MediaType::new("application/x-go-sgf", "", &["sgf"], false),
    MediaType::new("application/x-gramps-xml", "", &["gramps"], false),
    MediaType::new("application/x-graphing-calculator", "", &["gcf"], false),
    MediaType::new("application/x-gsp", "", &["gsp"], false),
    MediaType::new("application/x-gss", "", &["gss"], false),
    MediaType::new("application/x-gtar", "", &["gtar", "tgz", "taz"], false),
    MediaType::new("application/x-gzip", "", &["gz", "gzip", "tgz"], false),
    MediaType::new("application/x-hdf", "", &["hdf"], false),
    MediaType::new("application/x-helpfile", "", &["help", "hlp"], false),
    MediaType::new("application/x-httpd-imap", "", &["imap"], false),
    MediaType::new("application/x-httpd-php", "", &["phtml", "pht", "php"], false),
    MediaType::new("application/x-httpd-php-source", "", &["phps"], false),
    MediaType::new("application/x-httpd-php3", "", &["php3"], false),
    MediaType::new("application/x-httpd-php3-preprocessed", "", &["php3p"], false),
    MediaType::new("application/x-httpd-php4", "", &["php4"], false),
    MediaType::new("application/x-ica", "", &["ica"], false),
    MediaType::new("application/x-ima", "", &["ima"], false),
    MediaType::new("application/x-install-instructions", "", &["install"], false),
    MediaType::new("application/x-internet-signup", "", &["ins", "isp"], false),
    MediaType::new("application/x-internett-signup", "", &["ins"], false),
    MediaType::new("application/x-inventor", "", &["iv"], false),
    MediaType::new("application/x-ip2", "", &["ip"], false),
    MediaType::new("application/x-iphone", "", &["iii"], false),
    MediaType::new("application/x-iso9660-image", "", &["iso"], false),
    MediaType::new("application/x-java-applet", "", &[], false),
    MediaType::new("application/x-java-archive", "", &["jar"], false),
    MediaType::new("application/x-java-bean", "", &[], false),
    MediaType::new("application/x-java-class", "", &["class"], false),
    MediaType::new("application/x-java-commerce", "", &["jcm"], false),
    MediaType::new("application/x-java-jnlp-file", "", &["jnlp"], false),
    MediaType::new("application/x-java-serialized-object", "", &["ser"], false),
    MediaType::new("application/x-java-vm", "", &["class"], false),
    MediaType::new("application/x-javascript", "", &["js"], false),
    MediaType::new("application/x-kchart", "", &["chrt"], false),
    MediaType::new("application/x-kdelnk", "", &[], false),
    MediaType::new("application/x-killustrator", "", &["kil"], false),
    MediaType::new("application/x-koan", "", &["skd", "skm", "skp", "skt"], false),
    MediaType::new("application/x-kpresenter", "", &["kpr", "kpt"], false),
    MediaType::new("application/x-ksh", "", &["ksh"], false),
    MediaType::new("application/x-kspread", "", &["ksp"], false),
    MediaType::new("application/x-kword", "", &["kwd", "kwt"], false),
    MediaType::new("application/x-latex", "", &["latex", "ltx"], false),
    MediaType::new("application/x-lha", "", &["lha"], false),
    MediaType::new("application/x-lisp", "", &["lsp"], false),
    MediaType::new("application/x-livescreen", "", &["ivy"], false),
    MediaType::new("application/x-lotus", "", &["wq1"], false),
    MediaType::new("application/x-lotusscreencam", "", &["scm"], false),
    MediaType::new("application/x-lua-bytecode", "", &["luac"], false),
    MediaType::new("application/x-lzh", "", &["lzh"], false),
    MediaType::new("application/x-lzh-compressed", "", &["lzh", "lha"], false),
    MediaType::new("application/x-lzx", "", &["lzx"], false),
    MediaType::new("application/x-mac-binhex40", "", &["hqx"], false),
    MediaType::new("application/x-macbinary", "", &["bin"], false),
    MediaType::new("application/x-magic-cap-package-1.0", "", &["mc$"], false),
    MediaType::new("application/x-maker", "", &["frm", "maker", "frame", "fm", "fb", "book", "fbdoc"], false),
    MediaType::new("application/x-mathcad", "", &["mcd"], false),
    MediaType::new("application/x-meme", "", &["mm"], false),
    MediaType::new("application/x-midi", "", &["mid", "midi"], false),
    MediaType::new("application/x-mie", "", &["mie"], false),
    MediaType::new("application/x-mif", "", &["mif"], false),
    MediaType::new("application/x-mix-transfer", "", &["nix"], false),
    MediaType::new("application/x-mobipocket-ebook", "", &["prc", "mobi"], false),
    MediaType::new("application/x-mpegURL", "", &["m3u8"], false),
    MediaType::new("application/x-mplayer2", "", &["asx"], false),
    MediaType::new("application/x-ms-application", "", &["application"], false),
    MediaType::new("application/x-ms-shortcut", "", &["lnk"], false),
    MediaType::new("application/x-ms-wmd", "", &["wmd"], false),
    MediaType::new("application/x-ms-wmz", "", &["wmz"], false),
    MediaType::new("application/x-ms-xbap", "", &["xbap"], false),
    MediaType::new("application/x-msaccess", "", &["mdb"], false),
    MediaType::new("application/x-msbinder", "", &["obd"], false),
    MediaType::new("application/x-mscardfile", "", &["crd"], false),
    MediaType::new("application/x-msclip", "", &["clp"], false),
    MediaType::new("application/x-msdos-program", "", &["com", "exe", "bat", "dll"], false),
    MediaType::new("application/x-msdownload", "", &["exe", "dll", "com", "bat", "msi"], false),
    MediaType::new("application/x-msexcel", "", &["xla", "xls", "xlw"], false),
    MediaType::new("application/x-msi", "", &["msi"], false),
    MediaType::new("application/x-msmediaview", "", &["mvb", "m13", "m14"], false),
    MediaType::new("application/x-msmetafile", "", &["wmf", "wmz", "emf", "emz"], false),
    MediaType::new("application/x-msmoney", "", &["mny"], false),
    MediaType::new("application/x-mspowerpoint", "", &["ppt"], false),
    MediaType::new("application/x-mspublisher", "", &["pub"], false),
    MediaType::new("application/x-msschedule", "", &["scd"], false),
    MediaType::new("application/x-msterminal", "", &["trm"], false),
    MediaType::new("application/x-mswrite", "", &["wri"], false),
    MediaType::new("application/x-navi-animation", "", &["ani"], false),
    MediaType::new("application/x-navidoc", "", &["nvd"], false),
    MediaType::new("application/x-navimap", "", &["map"], false),
    MediaType::new("application/x-navistyle", "", &["stl"], false),
    MediaType::new("application/x-netcdf", "", &["nc", "cdf"], false),
    MediaType::new("application/x-newton-compatible-pkg", "", &["pkg"], false),
    MediaType::new("application/x-nokia-9000-communicator-add-on-software", "", &["aos"], false),
    MediaType::new("application/x-ns-proxy-autoconfig", "", &["pac"], false),
    MediaType::new("application/x-nwc", "", &["nwc"], false),
    MediaType::new("application/x-nzb", "", &["nzb"], false),
    MediaType::new("application/x-object", "", &["o"], false),
    MediaType::new("application/x-omc", "", &["omc"], false),
    MediaType::new("application/x-omcdatamaker", "", &["omcd"], false),
    MediaType::new("application/x-omcregerator", "", &["omcr"], false),
    MediaType::new("application/x-oz-application", "", &["oza"], false),
    MediaType::new("application/x-pagemaker", "", &["pm4", "pm5"], false),
    MediaType::new("application/x-pcl", "", &["pcl"], false),
    MediaType::new("application/x-perfmon", "", &["pma", "pmc", "pml", "pmr", "pmw"], false),
    MediaType::new("application/x-pixclscript", "", &["plx"], false),
    MediaType::new("application/x-pkcs10", "", &["p10"], false),
    MediaType::new("application/x-pkcs12", "", &["p12", "pfx"], false),
    MediaType::new("application/x-pkcs7-certificates", "", &["p7b", "spc"], false),
    MediaType::new("application/x-pkcs7-certreqresp", "", &["p7r"], false),
    MediaType::new("application/x-pkcs7-crl", "", &["crl"], false),
    MediaType::new("application/x-pkcs7-mime", "", &["p7c", "p7m"], false),
    MediaType::new("application/x-pkcs7-signature", "", &["p7a", "p7s"], false),
    MediaType::new("application/x-pki-message", "", &[], true),
    MediaType::new("application/x-pointplus", "", &["css"], false),
    MediaType::new("application/x-portable-anymap", "", &["pnm"], false),
    MediaType::new("application/x-project", "", &["mpc", "mpt", "mpv", "mpx"], false),
    MediaType::new("application/x-python-code", "", &["pyc", "pyo"], false),
    MediaType::new("application/x-qpro", "", &["wb1"], false),
    MediaType::new("application/x-quicktimeplayer", "", &["qtl"], false),
    MediaType::new("application/x-rar-compressed", "", &["rar"], false),
    MediaType::new("application/x-redhat-package-manager", "", &["rpm"], false),
    MediaType::new("application/x-research-info-systems", "", &["ris"], false),
    MediaType::new("application/x-rpm", "", &["rpm"], false),
    MediaType::new("application/x-rtf", "", &["rtf"], false),
    MediaType::new("application/x-rx", "", &[], false),
    MediaType::new("application/x-sdp", "", &["sdp"], false),
    MediaType::new("application/x-sea", "", &["sea"], false),
    MediaType::new("application/x-seelogo", "", &["sl"], false),
    MediaType::new("application/x-sh", "", &["sh"], false),
    MediaType::new("application/x-shar", "", &["shar", "sh"], false),
    MediaType::new("application/x-shellscript", "", &[], false),
    MediaType::new("application/x-shockwave-flash", "", &["swf", "swfl"], false),
    MediaType::new("application/x-silverlight-app", "", &["xap"], false),
    MediaType::new("application/x-sit", "", &["sit"], false),
    MediaType::new("application/x-sprite", "", &["spr", "sprite"], false),
    MediaType::new("application/x-sql", "", &["sql"], false),
    MediaType::new("application/x-stuffit", "", &["sit"], false),
    MediaType::new("application/x-stuffitx", "", &["sitx"], false),
    MediaType::new("application/x-subrip", "", &["srt"], false),
    MediaType::new("application/x-sv4cpio", "", &["sv4cpio"], false),
    MediaType::new("application/x-sv4crc", "", &["sv4crc"], false),
    MediaType::new("application/x-t3vm-image", "", &["t3"], false),
    MediaType::new("application/x-tads", "", &["gam"], false),
    MediaType::new("application/x-tar", "", &["tar"], false),
    MediaType::new("application/x-tbook", "", &["sbk", "tbk"], false),
    MediaType::new("application/x-tcl", "", &["tcl"], false),
    MediaType::new("application/x-tex", "", &["tex"], false),
    MediaType::new("application/x-tex-gf", "", &["gf"], false),
    MediaType::new("application/x-tex-pk", "", &["pk"], false),
    MediaType::new("application/x-tex-tfm", "", &["tfm"], false),
    MediaType::new("application/x-texinfo", "", &["texinfo", "texi"], false),
    MediaType::new("application/x-tgif", "", &["obj"], false),
    MediaType::new("application/x-trash", "", &["~", "%", "bak", "old", "sik"], false),
    MediaType::new("application/x-troff", "", &["roff", "t", "tr"], false),
    MediaType::new("application/x-troff-man", "", &["man"], false),
    MediaType::new("application/x-troff-me", "", &["me"], false),
    MediaType::new("application/x-troff-ms", "", &["ms"], false),
    MediaType::new("application/x-troff-msvideo", "", &["avi"], false),
    MediaType::new("application/x-ustar", "", &["ustar"], false),
    MediaType::new("application/x-videolan", "", &[], false),
    MediaType::new("application/x-visio", "", &["vsd", "vst", "vsw"], false),
    MediaType::new("application/x-vnd.audioexplosion.mzz", "", &["mzz"], false),
    MediaType::new("application/x-vnd.ls-xpix", "", &["xpix"], false),
    MediaType::new("application/x-vrml", "", &["vrml"], false),
    MediaType::new("application/x-wais-source", "", &["src", "wsrc"], false),
    MediaType::new("application/x-web-app-manifest+json", "application/json", &["webapp"], false),
    MediaType::new("application/x-wingz", "", &["wz"], false),
    MediaType::new("application/x-winhelp", "", &["hlp"], false),
    MediaType::new("application/x-wintalk", "", &["wtk"], false),
    MediaType::new("application/x-world", "", &["svr", "wrl"], false),
    MediaType::new("application/x-wpwin", "", &["wpd"], false),
    MediaType::new("application/x-wri", "", &["wri"], false),
    MediaType::new("application/x-www-form-urlencoded", "", &[], true),
    MediaType::new("application/x-x509-ca-cert", "", &["der", "cer", "crt"], true),
    MediaType::new("application/x-x509-ca-ra-cert", "", &[], true),
    MediaType::new("application/x-x509-next-ca-cert", "", &[], true),
    MediaType::new("application/x-x509-user-cert", "", &["crt"], false),
    MediaType::new("application/x-xcf", "", &["xcf"], false),
    MediaType::new("application/x-xfig", "", &["fig"], false),
    MediaType::new("application/x-xliff+xml", "text/xml", &["xlf"], false),
    MediaType::new("application/x-xpinstall", "", &["xpi"], false),
    MediaType::new("application/x-xz", "", &["xz"], false),
    MediaType::new("application/x-zip-compressed", "", &["zip"], false),
    MediaType::new("application/x-zmachine", "", &["z1", "z2", "z3", "z4", "z5", "z6", "z7", "z8"], false),
    MediaType::new("application/x400-bp", "", &[], true),
    MediaType::new("application/xacml+xml", "text/xml", &[], true),
    MediaType::new("application/xaml+xml", "text/xml", &["xaml"], false),
    MediaType::new("application/xcap-att+xml", "text/xml", &[], true),
    MediaType::new("application/xcap-caps+xml", "text/xml", &[], true),
    MediaType::new("application/xcap-diff+xml", "text/xml", &["xdf"], true),
    MediaType::new("application/xcap-el+xml", "text/xml", &[], true),
    MediaType::new("application/xcap-error+xml", "text/xml", &[], true),
    MediaType::new("application/xcap-ns+xml", "text/xml", &[], true),
    MediaType::new("application/xcon-conference-info+xml", "text/xml", &[], true),
    MediaType::new("application/xcon-conference-info-diff+xml", "text/xml", &[], true),
    MediaType::new("application/xenc+xml", "text/xml", &["xenc"], true),
    MediaType::new("application/xfdf", "", &[], true),
    MediaType::new("application/xhtml+xml", "text/xml", &["xhtml", "xht"], true),
    MediaType::new("application/xhtml-voice+xml", "text/xml", &[], false),
    MediaType::new("application/xliff+xml", "text/xml", &[], true),
    MediaType::new("application/xml", "", &["xml", "xsl", "xpdl"], true),
    MediaType::new("application/xml-dtd", "", &["dtd"], true),
    MediaType::new("application/xml-external-parsed-entity", "", &[], true),
    MediaType::new("application/xml-patch+xml", "text/xml", &[], true),
    MediaType::new("application/xmpp+xml", "text/xml", &[], true),
    MediaType::new("application/xop+xml", "text/xml", &["xop"], true),
    MediaType::new("application/xproc+xml", "text/xml", &["xpl"], false),
    MediaType::new("application/xslt+xml", "text/xml", &["xslt"], true),
    MediaType::new("application/xspf+xml", "text/xml", &["xspf"], false),
    MediaType::new("application/xv+xml", "text/xml", &["mxml", "xhvml", "xvml", "xvm"], true),
    MediaType::new("application/yang", "", &["yang"], true),
    MediaType::new("application/yang-data+cbor", "application/cbor", &[], true),
    MediaType::new("application/yang-data+json", "application/json", &[], true),
    MediaType::new("application/yang-data+xml", "text/xml", &[], true),
    MediaType::new("application/yang-patch+json", "application/json", &[], true),
    MediaType::new("application/yang-patch+xml", "text/xml", &[], true),
    MediaType::new("application/yin+xml", "text/xml", &["yin"], true),
    MediaType::new("application/ynd.ms-pkipko", "", &["pko"], false),
    MediaType::new("application/zip", "", &["zip"], true),
    MediaType::new("application/zlib", "", &[], true),
    MediaType::new("application/zstd", "", &[], true),
    MediaType::new("audio/1d-interleaved-parityfec", "", &[], true),
    MediaType::new("audio/32kadpcm", "", &[], true),
    MediaType::new("audio/3gpp", "", &[], true),
    MediaType::new("audio/3gpp2", "", &[], true),
    MediaType::new("audio/ATRAC-X", "", &[], true),
    MediaType::new("audio/ATRAC3", "", &[], true),
    MediaType::new("audio/BV32", "", &[], true),
    MediaType::new("audio/CN", "", &[], true),
    MediaType::new("audio/DV", "", &[], true),
    MediaType::new("audio/EVRC", "", &[], true),
    MediaType::new("audio/EVRC1", "", &[], true),
    MediaType::new("audio/EVRCB", "", &[], true),
    MediaType::new("audio/EVRCB0", "", &[], true),
    MediaType::new("audio/EVRCB1", "", &[], true),
    MediaType::new("audio/EVRCNW", "", &[], true),
    MediaType::new("audio/EVRCNW0", "", &[], true),
    MediaType::new("audio/EVRCNW1", "", &[], true),
    MediaType::new("audio/EVRCWB", "", &[], true),
    MediaType::new("audio/EVRCWB0", "", &[], true),
    MediaType::new("audio/EVRCWB1", "", &[], true),
    MediaType::new("audio/EVS", "", &[], true),
    MediaType::new("audio/G711-0", "", &[], true),
    MediaType::new("audio/G722", "", &[], true),
    MediaType::new("audio/G7221", "", &[], true),
    MediaType::new("audio/G726-16", "", &[], true),
    MediaType::new("audio/G729", "", &[], true),
    MediaType::new("audio/G7291", "", &[], true),
    MediaType::new("audio/GSM", "", &[], true),
    MediaType::new("audio/L24", "", &[], true),
    MediaType::new("audio/L8", "", &[], true),
    MediaType::new("audio/MELP", "", &[], true),
    MediaType::new("audio/MELP1200", "", &[], true),
    MediaType::new("audio/MELP2400", "", &[], true),
    MediaType::new("audio/MELP600", "", &[], true),
    MediaType::new("audio/MP4A-LATM", "", &[], true),
    MediaType::new("audio/MPA", "", &[], true),
    MediaType::new("audio/PCMA-WB", "", &[], true),
    MediaType::new("audio/PCMU-WB", "", &[], true),
    MediaType::new("audio/QCELP", "", &[], true),
    MediaType::new("audio/SMV", "", &[], true),
    MediaType::new("audio/SMV-QCP", "", &[], true),
    MediaType::new("audio/SMV0", "", &[], true),
    MediaType::new("audio/TETRA_ACELP", "", &[], true),
    MediaType::new("audio/TETRA_ACELP_BB", "", &[], true),
    MediaType::new("audio/TSVCIS", "", &[], true),
    MediaType::new("audio/UEMCLIP", "", &[], true),
    MediaType::new("audio/VMR-WB", "", &[], true),
    MediaType::new("audio/aac", "", &[], true),
    MediaType::new("audio/ac3", "", &[], true),
    MediaType::new("audio/adpcm", "", &["adp"], false),
    MediaType::new("audio/aiff", "", &["aif", "aifc", "aiff"], false),
    MediaType::new("audio/amr", "", &[], false),
    MediaType::new("audio/amr-wb", "", &[], false),
    MediaType::new("audio/amr-wb+", "", &[], true),
    MediaType::new("audio/aptx", "", &[], true),
    MediaType::new("audio/asc", "", &[], true),
    MediaType::new("audio/atrac-advanced-lossless", "", &[], false),
    MediaType::new("audio/basic", "", &["au", "snd"], true),
    MediaType::new("audio/bv16", "", &[], false),
    MediaType::new("audio/clearmode", "", &[], true),
    MediaType::new("audio/dat12", "", &[], false),
    MediaType::new("audio/dls", "", &[], true),
    MediaType::new("audio/dsr-es201108", "", &[], true),
    MediaType::new("audio/dsr-es202050", "", &[], true),
    MediaType::new("audio/dsr-es202211", "", &[], true),
    MediaType::new("audio/dsr-es202212", "", &[], true),
    MediaType::new("audio/dvi4", "", &[], false),
    MediaType::new("audio/eac3", "", &[], true),
    MediaType::new("audio/encaprtp", "", &[], true),
    MediaType::new("audio/evrc-qcp", "", &[], false),
    MediaType::new("audio/evrc0", "", &[], false),
    MediaType::new("audio/example", "", &[], true),
    MediaType::new("audio/flac", "", &["flac"], false),
    MediaType::new("audio/flexfec", "", &[], true),
    MediaType::new("audio/fwdred", "", &[], true),
    MediaType::new("audio/g.722.1", "", &[], false),
    MediaType::new("audio/g719", "", &[], false),
    MediaType::new("audio/g723", "", &[], false),
    MediaType::new("audio/g726-24", "", &[], false),
    MediaType::new("audio/g726-32", "", &[], false),
    MediaType::new("audio/g726-40", "", &[], false),
    MediaType::new("audio/g728", "", &[], false),
    MediaType::new("audio/g729d", "", &[], false),
    MediaType::new("audio/g729e", "", &[], false),
    MediaType::new("audio/gsm-efr", "", &[], false),
    MediaType::new("audio/gsm-hr-08", "", &[], false),
    MediaType::new("audio/iLBC", "", &[], true),
    MediaType::new("audio/ip-mr_v2.5", "", &[], true),
    MediaType::new("audio/isac", "", &[], false),
    MediaType::new("audio/it", "", &["it"], false),
    MediaType::new("audio/l16", "", &[], false),
    MediaType::new("audio/l20", "", &[], false),
    MediaType::new("audio/lpc", "", &[], false),
    MediaType::new("audio/make", "", &["funk", "my", "pfunk"], false),
    MediaType::new("audio/make.my.funk", "", &["pfunk"], false),
    MediaType::new("audio/mhas", "", &[], true),
    MediaType::new("audio/mid", "", &["rmi", "mid"], false),
    MediaType::new("audio/midi", "", &["mid", "midi", "kar", "rmi"], false),
    MediaType::new("audio/mobile-xmf", "", &[], true),
    MediaType::new("audio/mod", "", &["mod"], false),
    MediaType::new("audio/mp4", "", &["mp4a", "m4a"], true),
    MediaType::new("audio/mpa-robust", "", &[], true),
    MediaType::new("audio/mpeg", "", &["mpga", "mp2", "mp2a", "mp3", "m2a", "mpa", "mpg", "m3a", "mpega", "m4a"], true),
    MediaType::new("audio/mpeg3", "", &["mp3"], false),
    MediaType::new("audio/mpeg4-generic", "", &[], true),
    MediaType::new("audio/mpegurl", "", &["m3u"], false),
    MediaType::new("audio/musepack", "", &[], false),
    MediaType::new("audio/nspaudio", "", &["la", "lma"], false),
    MediaType::new("audio/ogg", "", &["oga", "ogg", "spx"], true),
    MediaType::new("audio/opus", "", &[], true),
    MediaType::new("audio/parityfec", "", &[], true),
    MediaType::new("audio/pcma", "", &[], false),
    MediaType::new("audio/pcmu", "", &[], false),
    MediaType::new("audio/prs.sid", "", &["sid"], true),
    MediaType::new("audio/raptorfec", "", &[], true),
    MediaType::new("audio/red", "", &[], false),
    MediaType::new("audio/rtp-enc-aescm128", "", &[], true),
    MediaType::new("audio/rtp-midi", "", &[], true),
    MediaType::new("audio/rtploopback", "", &[], true),
    MediaType::new("audio/rtx", "", &[], true),
    MediaType::new("audio/s3m", "", &["s3m"], false),
    MediaType::new("audio/scip", "", &[], true),
    MediaType::new("audio/silk", "", &["sil"], false),
    MediaType::new("audio/sofa", "", &[], true),
    MediaType::new("audio/sp-midi", "", &[], true),
    MediaType::new("audio/speex", "", &[], true),
    MediaType::new("audio/t140c", "", &[], true),
    MediaType::new("audio/t38", "", &[], true),
    MediaType::new("audio/telephone-event", "", &[], true),
    MediaType::new("audio/tone", "", &[], true),
    MediaType::new("audio/tsp-audio", "", &["tsi"], false),
    MediaType::new("audio/tsplayer", "", &["tsp"], false),
    MediaType::new("audio/ulpfec", "", &[], true),
    MediaType::new("audio/usac", "", &[], true),
    MediaType::new("audio/vdvi", "", &[], false),
    MediaType::new("audio/vnd.3gpp.iufp", "", &[], true),
    MediaType::new("audio/vnd.4SB", "", &[], true),
    MediaType::new("audio/vnd.CELP", "", &[], true),
    MediaType::new("audio/vnd.audiokoz", "", &[], true),
    MediaType::new("audio/vnd.cisco.nse", "", &[], true),
    MediaType::new("audio/vnd.cmles.radio-events", "", &[], true),
    MediaType::new("audio/vnd.cns.anp1", "", &[], true),
    MediaType::new("audio/vnd.cns.inf1", "", &[], true),
    MediaType::new("audio/vnd.dece.audio", "", &["uva", "uvva"], true),
    MediaType::new("audio/vnd.digital-winds", "", &["eol"], true),
    MediaType::new("audio/vnd.dlna.adts", "", &[], true),
    MediaType::new("audio/vnd.dolby.heaac.1", "", &[], true),
    MediaType::new("audio/vnd.dolby.heaac.2", "", &[], true),
    MediaType::new("audio/vnd.dolby.mlp", "", &[], true),
    MediaType::new("audio/vnd.dolby.mps", "", &[], true),
    MediaType::new("audio/vnd.dolby.pl2", "", &[], true),
    MediaType::new("audio/vnd.dolby.pl2x", "", &[], true),
    MediaType::new("audio/vnd.dolby.pl2z", "", &[], true),
    MediaType::new("audio/vnd.dolby.pulse.1", "", &[], true),
    MediaType::new("audio/vnd.dra", "", &["dra"], true),
    MediaType::new("audio/vnd.dts", "", &["dts"], true),
    MediaType::new("audio/vnd.dts.hd", "", &["dtshd"], true),
    MediaType::new("audio/vnd.dts.uhd", "", &[], true),
    MediaType::new("audio/vnd.dvb.file", "", &[], true),
    MediaType::new("audio/vnd.everad.plj", "", &[], true),
    MediaType::new("audio/vnd.hns.audio", "", &[], true),
    MediaType::new("audio/vnd.lucent.voice", "", &["lvp"], true),
    MediaType::new("audio/vnd.ms-playready.media.pya", "", &["pya"], true),
    MediaType::new("audio/vnd.nokia.mobile-xmf", "", &[], true),
    MediaType::new("audio/vnd.nortel.vbk", "", &[], true),
    MediaType::new("audio/vnd.nuera.ecelp4800", "", &["ecelp4800"], true),
    MediaType::new("audio/vnd.nuera.ecelp7470", "", &["ecelp7470"], true),
    MediaType::new("audio/vnd.nuera.ecelp9600", "", &["ecelp9600"], true),
    MediaType::new("audio/vnd.octel.sbc", "", &[], true),
    MediaType::new("audio/vnd.presonus.multitrack", "", &[], true),
    MediaType::new("audio/vnd.qcelp", "", &["qcp"], true),
    MediaType::new("audio/vnd.rhetorex.32kadpcm", "", &[], true),
    MediaType::new("audio/vnd.rip", "", &["rip"], true),
    MediaType::new("audio/vnd.sealedmedia.softseal.mpeg", "", &[], true),
    MediaType::new("audio/vnd.vmx.cvsd", "", &[], true),
    MediaType::new("audio/voc", "", &["voc"], false),
    MediaType::new("audio/vorbis", "", &[], true),
    MediaType::new("audio/vorbis-config", "", &[], true),
    MediaType::new("audio/voxware", "", &["vox"], false),
    MediaType::new("audio/wav", "", &["wav"], false),
    MediaType::new("audio/webm", "", &["weba"], false),
    MediaType::new("audio/x-aac", "", &["aac"], false),
    MediaType::new("audio/x-adpcm", "", &["snd"], false),
    MediaType::new("audio/x-aiff", "", &["aif", "aiff", "aifc"], false),
    MediaType::new("audio/x-au", "", &["au"], false),
    MediaType::new("audio/x-caf", "", &["caf"], false),
    MediaType::new("audio/x-flac", "", &["flac"], false),
    MediaType::new("audio/x-gsm", "", &["gsd", "gsm"], false),
    MediaType::new("audio/x-jam", "", &["jam"], false),
    MediaType::new("audio/x-liveaudio", "", &["lam"], false),
    MediaType::new("audio/x-matroska", "", &["mka"], false),
    MediaType::new("audio/x-mid", "", &["mid", "midi"], false),
    MediaType::new("audio/x-midi", "", &["mid", "midi"], false),
    MediaType::new("audio/x-mod", "", &["mod"], false),
    MediaType::new("audio/x-mpeg", "", &["mp2"], false),
    MediaType::new("audio/x-mpeg-3", "", &["mp3"], false),
    MediaType::new("audio/x-mpegurl", "", &["m3u"], false),
    MediaType::new("audio/x-mpequrl", "", &["m3u"], false),
    MediaType::new("audio/x-ms-wax", "", &["wax"], false),
    MediaType::new("audio/x-ms-wma", "", &["wma"], false),
    MediaType::new("audio/x-nspaudio", "", &["la", "lma"], false),
    MediaType::new("audio/x-pn-realaudio", "", &["ram", "ra", "rm", "rmm", "rmp"], false),
    MediaType::new("audio/x-pn-realaudio-plugin", "", &["rmp", "ra", "rpm"], false),
    MediaType::new("audio/x-psid", "", &["sid"], false),
    MediaType::new("audio/x-realaudio", "", &["ra"], false),
    MediaType::new("audio/x-scpls", "", &["pls"], false),
    MediaType::new("audio/x-sd2", "", &["sd2"], false),
    MediaType::new("audio/x-tta", "", &[], false),
    MediaType::new("audio/x-twinvq", "", &["vqf"], false),
    MediaType::new("audio/x-twinvq-plugin", "", &["vqe", "vql"], false),
    MediaType::new("audio/x-vnd.audioexplosion.mjuicemediafile", "", &["mjf"], false),
    MediaType::new("audio/x-voc", "", &["voc"], false),
    MediaType::new("audio/x-wav", "", &["wav"], false),
    MediaType::new("audio/xm", "", &["xm"], false),
    MediaType::new("chemical/x-cdx", "", &["cdx"], false),
    MediaType::new("chemical/x-cif", "", &["cif"], false),
    MediaType::new("chemical/x-cmdf", "", &["cmdf"], false),
    MediaType::new("chemical/x-cml", "", &["cml"], false),
    MediaType::new("chemical/x-csml", "", &["csml"], false),
    MediaType::new("chemical/x-pdb", "", &["pdb", "xyz"], false),
    MediaType::new("chemical/x-xyz", "", &["xyz"], false),
    MediaType::new("conference/x-cooltalk", "", &["ice"], false),
    MediaType::new("content/unknown", "", &[], false),
    MediaType::new("drawing/x-dwf", "", &["dwf"], false),
    MediaType::new("font/collection", "", &[], true),
    MediaType::new("font/opentype", "", &["otf"], false),
    MediaType::new("font/otf", "", &[], true),
    MediaType::new("font/sfnt", "", &[], true),
    MediaType::new("font/ttf", "", &[], true),
    MediaType::new("font/woff", "", &[], true),
    MediaType::new("font/woff2", "", &[], true),
    MediaType::new("image/aces", "", &[], true),
    MediaType::new("image/apng", "", &[], true),
    MediaType::new("image/avci", "", &[], true),
    MediaType::new("image/avcs", "", &[], true),
    MediaType::new("image/avif", "", &[], true),
    MediaType::new("image/bmp", "", &["bmp", "bm"], true),
    MediaType::new("image/cgm", "", &["cgm"], true),
    MediaType::new("image/cis-cod", "", &["cod"], false),
    MediaType::new("image/cmu-raster", "", &["ras", "rast"], false),
    MediaType::new("image/dicom-rle", "", &[], true),
    MediaType::new("image/dpx", "", &[], true),
    MediaType::new("image/emf", "", &[], true),
    MediaType::new("image/example", "", &[], true),
    MediaType::new("image/fif", "", &["fif"], false),
    MediaType::new("image/fits", "", &[], true),
    MediaType::new("image/florian", "", &["flo", "turbot"], false),
    MediaType::new("image/g3fax", "", &["g3"], true),
    MediaType::new("image/gif", "", &["gif"], false),
    MediaType::new("image/heic", "", &[], true),
    MediaType::new("image/heic-sequence", "", &[], true),
    MediaType::new("image/heif", "", &[], true),
    MediaType::new("image/heif-sequence", "", &[], true),
    MediaType::new("image/hej2k", "", &[], true),
    MediaType::new("image/hsj2", "", &[], true),
    MediaType::new("image/ief", "", &["ief", "iefs"], false),
    MediaType::new("image/jls", "", &[], true),
    MediaType::new("image/jp2", "", &[], true),
    MediaType::new("image/jpeg", "", &["jpeg", "jpg", "jfif", "jfif-tbnl", "jpe"], false),
    MediaType::new("image/jph", "", &[], true),
    MediaType::new("image/jphc", "", &[], true),
    MediaType::new("image/jpm", "", &[], true),
    MediaType::new("image/jpx", "", &[], true),
    MediaType::new("image/jutvision", "", &["jut"], false),
    MediaType::new("image/jxr", "", &[], true),
    MediaType::new("image/jxrA", "", &[], true),
    MediaType::new("image/jxrS", "", &[], true),
    MediaType::new("image/jxs", "", &[], true),
    MediaType::new("image/jxsc", "", &[], true),
    MediaType::new("image/jxsi", "", &[], true),
    MediaType::new("image/jxss", "", &[], true),
    MediaType::new("image/ktx", "", &["ktx"], true),
    MediaType::new("image/ktx2", "", &[], true),
    MediaType::new("image/naplps", "", &["nap", "naplps"], true),
    MediaType::new("image/pcx", "", &["pcx"], false),
    MediaType::new("image/pict", "", &["pic", "pict"], false),
    MediaType::new("image/pipeg", "", &["jfif"], false),
    MediaType::new("image/pjpeg", "", &["jfif", "jpe", "jpeg", "jpg"], false),
    MediaType::new("image/png", "", &["png", "x-png"], true),
    MediaType::new("image/prs.btif", "", &["btif"], true),
    MediaType::new("image/prs.pti", "", &[], true),
    MediaType::new("image/pwg-raster", "", &[], true),
    MediaType::new("image/sgi", "", &["sgi"], false),
    MediaType::new("image/svg+xml", "text/xml", &["svg", "svgz"], true),
    MediaType::new("image/t38", "", &[], true),
    MediaType::new("image/tiff", "", &["tiff", "tif"], true),
    MediaType::new("image/tiff-fx", "", &[], true),
    MediaType::new("image/vasa", "", &["mcf"], false),
    MediaType::new("image/vnd.adobe.photoshop", "", &["psd"], true),
    MediaType::new("image/vnd.airzip.accelerator.azv", "", &[], true),
    MediaType::new("image/vnd.cns.inf2", "", &[], true),
    MediaType::new("image/vnd.dece.graphic", "", &["uvi", "uvvi", "uvg", "uvvg"], true),
    MediaType::new("image/vnd.djvu", "", &["djvu", "djv"], true),
    MediaType::new("image/vnd.dvb.subtitle", "", &["sub"], true),
    MediaType::new("image/vnd.dwg", "", &["dwg", "dxf", "svf"], true),
    MediaType::new("image/vnd.dxf", "", &["dxf"], true),
    MediaType::new("image/vnd.fastbidsheet", "", &["fbs"], true),
    MediaType::new("image/vnd.fpx", "", &["fpx", "fpix"], true),
    MediaType::new("image/vnd.fst", "", &["fst"], true),
    MediaType::new("image/vnd.fujixerox.edmics-mmr", "", &["mmr"], true),
    MediaType::new("image/vnd.fujixerox.edmics-rlc", "", &["rlc"], true),
    MediaType::new("image/vnd.globalgraphics.pgb", "", &[], true),
    MediaType::new("image/vnd.microsoft.icon", "", &[], true),
    MediaType::new("image/vnd.mix", "", &[], true),
    MediaType::new("image/vnd.mozilla.apng", "", &[], true),
    MediaType::new("image/vnd.ms-modi", "", &["mdi"], true),
    MediaType::new("image/vnd.ms-photo", "", &["wdp"], false),
    MediaType::new("image/vnd.net-fpx", "", &["npx", "fpx"], true),
    MediaType::new("image/vnd.pco.b16", "", &[], true),
    MediaType::new("image/vnd.radiance", "", &[], true),
    MediaType::new("image/vnd.rn-realflash", "", &["rf"], false),
    MediaType::new("image/vnd.rn-realpix", "", &["rp"], false),
    MediaType::new("image/vnd.sealed.png", "", &[], true),
    MediaType::new("image/vnd.sealedmedia.softseal.gif", "", &[], true),
    MediaType::new("image/vnd.sealedmedia.softseal.jpg", "", &[], true),
    MediaType::new("image/vnd.svf", "", &[], true),
    MediaType::new("image/vnd.tencent.tap", "", &[], true),
    MediaType::new("image/vnd.valve.source.texture", "", &[], true),
    MediaType::new("image/vnd.wap.wbmp", "", &["wbmp"], true),
    MediaType::new("image/vnd.xiff", "", &["xif"], true),
    MediaType::new("image/vnd.zbrush.pcx", "", &[], true),
    MediaType::new("image/webp", "", &["webp"], false),
    MediaType::new("image/wmf", "", &[], true),
    MediaType::new("image/x-3ds", "", &["3ds"], false),
    MediaType::new("image/x-cmu-rast", "", &["ras"], false),
    MediaType::new("image/x-cmu-raster", "", &["ras"], false),
    MediaType::new("image/x-cmx", "", &["cmx"], false),
    MediaType::new("image/x-coreldraw", "", &["cdr"], false),
    MediaType::new("image/x-coreldrawpattern", "", &["pat"], false),
    MediaType::new("image/x-coreldrawtemplate", "", &["cdt"], false),
    MediaType::new("image/x-corelphotopaint", "", &["cpt"], false),
    MediaType::new("image/x-dwg", "", &["dwg", "dxf", "svf"], false),
    MediaType::new("image/x-freehand", "", &["fh", "fhc", "fh4", "fh5", "fh7"], false),
    MediaType::new("image/x-icon", "", &["ico"], false),
    MediaType::new("image/x-jg", "", &["art"], false),
    MediaType::new("image/x-jng", "", &["jng"], false),
    MediaType::new("image/x-jps", "", &["jps"], false),
    MediaType::new("image/x-mrsid-image", "", &["sid"], false),
    MediaType::new("image/x-ms-bmp", "", &["bmp"], false),
    MediaType::new("image/x-niff", "", &["nif", "niff"], false),
    MediaType::new("image/x-pcx", "", &["pcx"], false),
    MediaType::new("image/x-photoshop", "", &["psd"], false),
    MediaType::new("image/x-pict", "", &["pic", "pct"], false),
    MediaType::new("image/x-portable-anymap", "", &["pnm"], false),
    MediaType::new("image/x-portable-bitmap", "", &["pbm"], false),
    MediaType::new("image/x-portable-graymap", "", &["pgm"], false),
    MediaType::new("image/x-portable-greymap", "", &["pgm"], false),
    MediaType::new("image/x-portable-pixmap", "", &["ppm"], false),
    MediaType::new("image/x-quicktime", "", &["qif", "qti", "qtif"], false),
    MediaType::new("image/x-rgb", "", &["rgb"], false),
    MediaType::new("image/x-tga", "", &["tga"], false),
    MediaType::new("image/x-tiff", "", &["tif", "tiff"], false),
    MediaType::new("image/x-windows-bmp", "", &["bmp"], false),
    MediaType::new("image/x-xbitmap", "", &["xbm", "xpm"], false),
    MediaType::new("image/x-xbm", "", &["xbm"], false),
    MediaType::new("image/x-xpixmap", "", &["xpm", "pm"], false),
    MediaType::new("image/x-xwd", "", &["xwd"], false),
    MediaType::new("image/x-xwindowdump", "", &["xwd"], false),
    MediaType::new("image/xbm", "", &["xbm"], false),
    MediaType::new("image/xpm", "", &["xpm"], false),
    MediaType::new("inode/blockdevice", "", &[], false),
    MediaType::new("inode/chardevice", "", &[], false),
    MediaType::new("inode/directory", "", &[], false),
    MediaType::new("inode/directory-locked", "", &[], false),
    MediaType::new("inode/fifo", "", &[], false),
    MediaType::new("inode/socket", "", &[], false),
    MediaType::new("message/bhttp", "", &[], true),
    MediaType::new("message/cpim", "", &[], false),
    MediaType::new("message/delivery-status", "", &[], true),
    MediaType::new("message/disposition-notification", "", &[], true),
    MediaType::new("message/example", "", &[], true),
    MediaType::new("message/external-body", "", &[], false),
    MediaType::new("message/feedback-report", "", &[], true),
    MediaType::new("message/global", "", &[], true),
    MediaType::new("message/global-delivery-status", "", &[], true),
    MediaType::new("message/global-disposition-notification", "", &[], true),
    MediaType::new("message/global-headers", "", &[], true),
    MediaType::new("message/http", "", &[], true),
    MediaType::new("message/imdn+xml", "text/xml", &[], true),
    MediaType::new("message/news", "", &[], true),
    MediaType::new("message/partial", "", &[], false),
    MediaType::new("message/rfc822", "", &["eml", "mht", "mhtml", "mime", "nws"], false),
    MediaType::new("message/s-http", "", &[], true),
    MediaType::new("message/sip", "", &[], true),
    MediaType::new("message/sipfrag", "", &[], true),
    MediaType::new("message/tracking-status", "", &[], true),
    MediaType::new("message/vnd.si.simp", "", &[], true),
    MediaType::new("message/vnd.wfa.wsc", "", &[], true),
    MediaType::new("model/3mf", "", &[], true),
    MediaType::new("model/e57", "", &[], true),
    MediaType::new("model/example", "", &[], true),
    MediaType::new("model/gltf+json", "application/json", &[], true),
    MediaType::new("model/gltf-binary", "", &[], true),
    MediaType::new("model/iges", "", &["igs", "iges"], true),
    MediaType::new("model/mesh", "", &["msh", "mesh", "silo"], false),
    MediaType::new("model/mtl", "", &[], true),
    MediaType::new("model/obj", "", &[], true),
    MediaType::new("model/prc", "", &[], true),
    MediaType::new("model/step", "", &[], true),
    MediaType::new("model/step+xml", "text/xml", &[], true),
    MediaType::new("model/step+zip", "application/zip", &[], true),
    MediaType::new("model/step-xml+zip", "application/zip", &[], true),
    MediaType::new("model/stl", "", &[], true),
    MediaType::new("model/u3d", "", &[], true),
    MediaType::new("model/vnd.collada+xml", "text/xml", &["dae"], true),
    MediaType::new("model/vnd.dwf", "", &["dwf"], true),
    MediaType::new("model/vnd.flatland.3dml", "", &[], true),
    MediaType::new("model/vnd.gdl", "", &["gdl"], true),
    MediaType::new("model/vnd.gs-gdl", "", &[], true),
    MediaType::new("model/vnd.gs.gdl", "", &[], false),
    MediaType::new("model/vnd.gtw", "", &["gtw"], true),
    MediaType::new("model/vnd.moml+xml", "text/xml", &[], true),
    MediaType::new("model/vnd.mts", "", &["mts"], true),
    MediaType::new("model/vnd.opengex", "", &[], true),
    MediaType::new("model/vnd.parasolid.transmit.binary", "", &[], true),
    MediaType::new("model/vnd.parasolid.transmit.text", "", &[], true),
    MediaType::new("model/vnd.pytha.pyox", "", &[], true),
    MediaType::new("model/vnd.rosette.annotated-data-model", "", &[], true),
    MediaType::new("model/vnd.sap.vds", "", &[], true),
    MediaType::new("model/vnd.usda", "", &[], true),
    MediaType::new("model/vnd.usdz+zip", "application/zip", &[], true),
    MediaType::new("model/vnd.valve.source.compiled-map", "", &[], true),
    MediaType::new("model/vnd.vtu", "", &["vtu"], true),
    MediaType::new("model/vrml", "", &["wrl", "vrml", "wrz"], false),
    MediaType::new("model/x-pov", "", &["pov"], false),
    MediaType::new("model/x3d+binary", "", &["x3db", "x3dbz"], false),
    MediaType::new("model/x3d+fastinfoset", "", &[], true),
    MediaType::new("model/x3d+vrml", "", &["x3dv", "x3dvz"], false),
    MediaType::new("model/x3d+xml", "text/xml", &["x3d", "x3dz"], true),
    MediaType::new("model/x3d-vrml", "", &[], true),
    MediaType::new("multipart/alternative", "", &[], false),
    MediaType::new("multipart/appledouble", "", &[], true),
    MediaType::new("multipart/byteranges", "", &[], true),
    MediaType::new("multipart/digest", "", &[], false),
    MediaType::new("multipart/encrypted", "", &[], true),
    MediaType::new("multipart/example", "", &[], true),
    MediaType::new("multipart/form-data", "", &[], true),
    MediaType::new("multipart/header-set", "", &[], true),
    MediaType::new("multipart/mixed", "", &[], false),
    MediaType::new("multipart/multilingual", "", &[], true),
    MediaType::new("multipart/parallel", "", &[], false),
    MediaType::new("multipart/related", "", &[], true),
    MediaType::new("multipart/report", "", &[], true),
    MediaType::new("multipart/signed", "", &[], true),
    MediaType::new("multipart/vnd.bint.med-plus", "", &[], true),
    MediaType::new("multipart/voice-message", "", &[], true),
    MediaType::new("multipart/x-gzip", "", &["gzip"], false),
    MediaType::new("multipart/x-mixed-replace", "", &[], true),
    MediaType::new("multipart/x-ustar", "", &["ustar"], false),
    MediaType::new("multipart/x-zip", "", &["zip"], false),
    MediaType::new("music/crescendo", "", &["mid", "midi"], false),
    MediaType::new("music/x-karaoke", "", &["kar"], false),
    MediaType::new("music/x-midi", "", &["mid", "midi"], false),
    MediaType::new("paleovu/x-pv", "", &["pvu"], false),
    MediaType::new("text/1d-interleaved-parityfec", "", &[], true),
    MediaType::new("text/RED", "", &[], true),
    MediaType::new("text/SGML", "", &[], true),
    MediaType::new("text/asp", "", &["asp"], false),
    MediaType::new("text/cache-manifest", "", &["appcache", "manifest"], true),
    MediaType::new("text/calendar", "", &["ics", "ifb", "icz"], true),
    MediaType::new("text/comma-separated-values", "", &["csv"], false),
    MediaType::new("text/cql", "", &[], true),
    MediaType::new("text/cql-expression", "", &[], true),
    MediaType::new("text/cql-identifier", "", &[], true),
    MediaType::new("text/css", "", &["css"], true),
    MediaType::new("text/csv", "", &["csv"], true),
    MediaType::new("text/csv-schema", "", &[], true),
    MediaType::new("text/directory", "", &[], true),
    MediaType::new("text/dns", "", &[], true),
    MediaType::new("text/ecmascript", "", &["js"], true),
    MediaType::new("text/encaprtp", "", &[], true),
    MediaType::new("text/english", "", &[], false),
    MediaType::new("text/enriched", "", &[], false),
    MediaType::new("text/event-stream", "", &["event-stream"], false),
    MediaType::new("text/example", "", &[], true),
    MediaType::new("text/fhirpath", "", &[], true),
    MediaType::new("text/flexfec", "", &[], true),
    MediaType::new("text/fwdred", "", &[], true),
    MediaType::new("text/gff3", "", &[], true),
    MediaType::new("text/grammar-ref-list", "", &[], true),
    MediaType::new("text/h323", "", &["323"], false),
    MediaType::new("text/hl7v2", "", &[], true),
    MediaType::new("text/html", "", &["html", "acgi", "htm", "htmls", "htx", "shtml", "stm"], true),
    MediaType::new("text/iuls", "", &["uls"], false),
    MediaType::new("text/javascript", "", &["js"], true),
    MediaType::new("text/jcr-cnd", "", &[], true),
    MediaType::new("text/markdown", "", &[], true),
    MediaType::new("text/mathml", "", &["mml"], false),
    MediaType::new("text/mcf", "", &["mcf"], false),
    MediaType::new("text/mizar", "", &[], true),
    MediaType::new("text/n3", "", &["n3"], true),
    MediaType::new("text/parameters", "", &[], true),
    MediaType::new("text/parityfec", "", &[], true),
    MediaType::new("text/pascal", "", &["pas"], false),
    MediaType::new("text/plain", "", &["txt", "text", "conf", "def", "list", "log", "c", "c++", "cc", "com", "cxx", "f", "f90", "for", "g", "h", "hh", "idc", "jav", "java", "lst", "m", "mar", "pl", "sdml", "bas", "in", "asc", "diff", "pot", "el", "ksh"], false),
    MediaType::new("text/plain-bas", "", &["par"], false),
    MediaType::new("text/provenance-notation", "", &[], true),
    MediaType::new("text/prs.fallenstein.rst", "", &[], true),
    MediaType::new("text/prs.lines.tag", "", &["dsc"], true),
    MediaType::new("text/prs.prop.logic", "", &[], true),
    MediaType::new("text/raptorfec", "", &[], true),
    MediaType::new("text/rfc822-headers", "", &[], true),
    MediaType::new("text/richtext", "", &["rtx", "rt", "rtf"], false),
    MediaType::new("text/rtf", "", &["rtf"], true),
    MediaType::new("text/rtp-enc-aescm128", "", &[], true),
    MediaType::new("text/rtploopback", "", &[], true),
    MediaType::new("text/rtx", "", &[], true),
    MediaType::new("text/scriplet", "", &["wsc"], false),
    MediaType::new("text/scriptlet", "", &["sct", "wsc"], false),
    MediaType::new("text/shaclc", "", &[], true),
    MediaType::new("text/shex", "", &[], true),
    MediaType::new("text/spdx", "", &[], true),
    MediaType::new("text/strings", "", &[], true),
    MediaType::new("text/t140", "", &[], true),
    MediaType::new("text/tab-separated-values", "", &["tsv"], true),
    MediaType::new("text/texmacs", "", &["tm", "ts"], false),
    MediaType::new("text/troff", "", &["t", "tr", "roff", "man", "me", "ms"], true),
    MediaType::new("text/turtle", "", &["ttl"], true),
    MediaType::new("text/ulpfec", "", &[], true),
    MediaType::new("text/uri-list", "", &["uri", "uris", "uni", "unis", "urls"], true),
    MediaType::new("text/vcard", "", &["vcard"], true),
    MediaType::new("text/vnd.IPTC.NITF", "", &[], true),
    MediaType::new("text/vnd.IPTC.NewsML", "", &[], true),
    MediaType::new("text/vnd.a", "", &[], true),
    MediaType::new("text/vnd.abc", "", &["abc"], true),
    MediaType::new("text/vnd.ascii-art", "", &[], true),
    MediaType::new("text/vnd.curl", "", &["curl"], true),
    MediaType::new("text/vnd.curl.dcurl", "", &["dcurl"], false),
    MediaType::new("text/vnd.curl.mcurl", "", &["mcurl"], false),
    MediaType::new("text/vnd.curl.scurl", "", &["scurl"], false),
    MediaType::new("text/vnd.debian.copyright", "", &[], true),
    MediaType::new("text/vnd.dmclientscript", "", &[], false),
    MediaType::new("text/vnd.dvb.subtitle", "", &["sub"], true),
    MediaType::new("text/vnd.esmertec.theme-descriptor", "", &[], true),
    MediaType::new("text/vnd.exchangeable", "", &[], true),
    MediaType::new("text/vnd.familysearch.gedcom", "", &[], true),
    MediaType::new("text/vnd.ficlab.flt", "", &[], true),
    MediaType::new("text/vnd.flatland.3dml", "", &[], false),
    MediaType::new("text/vnd.fly", "", &["fly"], true),
    MediaType::new("text/vnd.fmi.flexstor", "", &["flx"], true),
    MediaType::new("text/vnd.gml", "", &[], true),
    MediaType::new("text/vnd.graphviz", "", &["gv"], true),
    MediaType::new("text/vnd.hans", "", &[], true),
    MediaType::new("text/vnd.hgl", "", &[], true),
    MediaType::new("text/vnd.in3d.3dml", "", &["3dml"], true),
    MediaType::new("text/vnd.in3d.spot", "", &["spot"], true),
    MediaType::new("text/vnd.latex-z", "", &[], true),
    MediaType::new("text/vnd.motorola.reflex", "", &[], true),
    MediaType::new("text/vnd.ms-mediapackage", "", &[], true),
    MediaType::new("text/vnd.net2phone.commcenter.command", "", &[], true),
    MediaType::new("text/vnd.radisys.msml-basic-layout", "", &[], true),
    MediaType::new("text/vnd.rn-realtext", "", &["rt"], false),
    MediaType::new("text/vnd.senx.warpscript", "", &[], true),
    MediaType::new("text/vnd.si.uricatalogue", "", &[], true),
    MediaType::new("text/vnd.sosi", "", &[], true),
    MediaType::new("text/vnd.sun.j2me.app-descriptor", "", &["jad"], true),
    MediaType::new("text/vnd.trolltech.linguist", "", &[], true),
    MediaType::new("text/vnd.wap.si", "", &["si"], true),
    MediaType::new("text/vnd.wap.sl", "", &["sl"], true),
    MediaType::new("text/vnd.wap.wml", "", &["wml"], true),
    MediaType::new("text/vnd.wap.wmlscript", "", &["wmls"], true),
    MediaType::new("text/vtt", "", &["vtt"], true),
    MediaType::new("text/webviewhtml", "", &["htt"], false),
    MediaType::new("text/x-asm", "", &["s", "asm"], false),
    MediaType::new("text/x-audiosoft-intra", "", &["aip"], false),
    MediaType::new("text/x-c", "", &["c", "cc", "cxx", "cpp", "h", "hh", "dic"], false),
    MediaType::new("text/x-c++hdr", "text/plain", &["h++", "hpp", "hxx", "hh"], false),
    MediaType::new("text/x-c++src", "text/plain", &["c++", "cpp", "cxx", "cc"], false),
    MediaType::new("text/x-chdr", "", &["h"], false),
    MediaType::new("text/x-component", "", &["htc"], false),
    MediaType::new("text/x-crontab", "", &[], false),
    MediaType::new("text/x-csh", "", &["csh"], false),
    MediaType::new("text/x-csrc", "", &["c"], false),
    MediaType::new("text/x-fortran", "", &["f", "for", "f77", "f90"], false),
    MediaType::new("text/x-h", "", &["h", "hh"], false),
    MediaType::new("text/x-java", "", &["java"], false),
    MediaType::new("text/x-java-source", "", &["java", "jav"], false),
    MediaType::new("text/x-la-asf", "", &["lsx"], false),
    MediaType::new("text/x-lua", "", &["lua"], false),
    MediaType::new("text/x-m", "", &["m"], false),
    MediaType::new("text/x-makefile", "", &[], false),
    MediaType::new("text/x-markdown", "", &["markdown", "md", "mkd"], false),
    MediaType::new("text/x-moc", "", &["moc"], false),
    MediaType::new("text/x-nfo", "", &["nfo"], false),
    MediaType::new("text/x-opml", "", &["opml"], false),
    MediaType::new("text/x-pascal", "", &["p", "pas"], false),
    MediaType::new("text/x-pcs-gcd", "", &["gcd"], false),
    MediaType::new("text/x-perl", "", &["pl", "pm"], false),
    MediaType::new("text/x-python", "", &["py"], false),
    MediaType::new("text/x-script", "", &["hlb"], false),
    MediaType::new("text/x-script.csh", "", &["csh"], false),
    MediaType::new("text/x-script.elisp", "", &["el"], false),
    MediaType::new("text/x-script.guile", "", &["scm"], false),
    MediaType::new("text/x-script.ksh", "", &["ksh"], false),
    MediaType::new("text/x-script.lisp", "", &["lsp"], false),
    MediaType::new("text/x-script.perl", "", &["pl"], false),
    MediaType::new("text/x-script.perl-module", "", &["pm"], false),
    MediaType::new("text/x-script.phyton", "", &["py"], false),
    MediaType::new("text/x-script.rexx", "", &["rexx"], false),
    MediaType::new("text/x-script.scheme", "", &["scm"], false),
    MediaType::new("text/x-script.sh", "", &["sh"], false),
    MediaType::new("text/x-script.tcl", "", &["tcl"], false),
    MediaType::new("text/x-script.tcsh", "", &["tcsh"], false),
    MediaType::new("text/x-script.zsh", "", &["zsh"], false),
    MediaType::new("text/x-server-parsed-html", "", &["shtml", "ssi"], false),
    MediaType::new("text/x-setext", "", &["etx"], false),
    MediaType::new("text/x-sfv", "", &["sfv"], false),
    MediaType::new("text/x-sgml", "", &["sgm", "sgml"], false),
    MediaType::new("text/x-sh", "", &["sh"], false),
    MediaType::new("text/x-speech", "", &["spc", "talk"], false),
    MediaType::new("text/x-tcl", "", &["tcl", "tk"], false),
    MediaType::new("text/x-tex", "", &["tex", "ltx", "sty", "cls"], false),
    MediaType::new("text/x-uil", "", &["uil"], false),
    MediaType::new("text/x-uuencode", "", &["uu", "uue"], false),
    MediaType::new("text/x-vcalendar", "", &["vcs"], false),
    MediaType::new("text/x-vcard", "", &["vcf"], false),
    MediaType::new("text/x-yaml", "", &["yaml", "yml"], false),
    MediaType::new("text/xml", "", &["xml"], true),
    MediaType::new("text/xml-external-parsed-entity", "", &[], true),
    MediaType::new("unknown/unknown", "", &[], false),
    MediaType::new("video/1d-interleaved-parityfec", "", &[], true),
    MediaType::new("video/3gpp", "", &["3gp"], true),
    MediaType::new("video/3gpp-tt", "", &[], true),
    MediaType::new("video/3gpp2", "", &["3g2"], true),
    MediaType::new("video/AV1", "", &[], true),
    MediaType::new("video/CelB", "", &[], true),
    MediaType::new("video/DV", "", &[], true),
    MediaType::new("video/FFV1", "", &[], true),
    MediaType::new("video/H261", "", &[], true),
    MediaType::new("video/H263", "", &[], true),
    MediaType::new("video/H263-2000", "", &[], true),
    MediaType::new("video/H265", "", &[], true),
    MediaType::new("video/H266", "", &[], true),
    MediaType::new("video/JPEG", "", &[], true),
    MediaType::new("video/MP1S", "", &[], true),
    MediaType::new("video/MP2P", "", &[], true),
    MediaType::new("video/MP4V-ES", "", &[], true),
    MediaType::new("video/SMPTE292M", "", &[], true),
    MediaType::new("video/VP8", "", &[], true),
    MediaType::new("video/VP9", "", &[], true),
    MediaType::new("video/animaflex", "", &["afl"], false),
    MediaType::new("video/avi", "", &["avi"], false),
    MediaType::new("video/avs-video", "", &["avs"], false),
    MediaType::new("video/bmpeg", "", &[], false),
    MediaType::new("video/bt656", "", &[], false),
    MediaType::new("video/dl", "", &["dl"], false),
    MediaType::new("video/encaprtp", "", &[], true),
    MediaType::new("video/example", "", &[], true),
    MediaType::new("video/flc", "", &["flc", "fli"], false),
    MediaType::new("video/flexfec", "", &[], true),
    MediaType::new("video/fli", "", &["flc", "fli"], false),
    MediaType::new("video/gl", "", &["gl"], false),
    MediaType::new("video/h263-1998", "", &[], false),
    MediaType::new("video/h264", "", &["h264"], false),
    MediaType::new("video/h264-rcdo", "", &[], false),
    MediaType::new("video/h264-svc", "", &[], false),
    MediaType::new("video/iso.segment", "", &[], true),
    MediaType::new("video/jpeg2000", "", &[], true),
    MediaType::new("video/jpm", "", &["jpm", "jpgm"], false),
    MediaType::new("video/jxsv", "", &[], true),
    MediaType::new("video/mj2", "", &["mj2", "mjp2"], true),
    MediaType::new("video/mp2t", "", &[], false),
    MediaType::new("video/mp4", "", &["mp4", "mp4v", "mpg4"], true),
    MediaType::new("video/mpeg", "", &["mpeg", "mpg", "mpe", "m1v", "m2v", "mp2", "mp3", "mpa", "mpv2"], false),
    MediaType::new("video/mpeg4-generic", "", &[], true),
    MediaType::new("video/mpv", "", &[], false),
    MediaType::new("video/msvideo", "", &["avi"], false),
    MediaType::new("video/nv", "", &[], true),
    MediaType::new("video/ogg", "", &["ogv"], true),
    MediaType::new("video/parityfec", "", &[], true),
    MediaType::new("video/pointer", "", &[], true),
    MediaType::new("video/quicktime", "", &["qt", "moov", "mov"], true),
    MediaType::new("video/raptorfec", "", &[], true),
    MediaType::new("video/raw", "", &[], true),
    MediaType::new("video/rtp-enc-aescm128", "", &[], true),
    MediaType::new("video/rtploopback", "", &[], true),
    MediaType::new("video/rtx", "", &[], true),
    MediaType::new("video/scip", "", &[], true),
    MediaType::new("video/smpte291", "", &[], true),
    MediaType::new("video/ulpfec", "", &[], true),
    MediaType::new("video/vc1", "", &[], true),
    MediaType::new("video/vc2", "", &[], true),
    MediaType::new("video/vdo", "", &["vdo"], false),
    MediaType::new("video/vivo", "", &["viv", "vivo"], false),
    MediaType::new("video/vnd.CCTV", "", &[], true),
    MediaType::new("video/vnd.dece.hd", "", &["uvh", "uvvh"], true),
    MediaType::new("video/vnd.dece.mobile", "", &["uvm", "uvvm"], true),
    MediaType::new("video/vnd.dece.mp4", "", &[], true),
    MediaType::new("video/vnd.dece.pd", "", &["uvp", "uvvp"], true),
    MediaType::new("video/vnd.dece.sd", "", &["uvs", "uvvs"], true),
    MediaType::new("video/vnd.dece.video", "", &["uvv", "uvvv"], true),
    MediaType::new("video/vnd.directv.mpeg", "", &[], true),
    MediaType::new("video/vnd.directv.mpeg-tts", "", &[], true),
    MediaType::new("video/vnd.dlna.mpeg-tts", "", &[], true),
    MediaType::new("video/vnd.dvb.file", "", &["dvb"], true),
    MediaType::new("video/vnd.fvt", "", &["fvt"], true),
    MediaType::new("video/vnd.hns.video", "", &[], true),
    MediaType::new("video/vnd.iptvforum.1dparityfec-1010", "", &[], true),
    MediaType::new("video/vnd.iptvforum.1dparityfec-2005", "", &[], true),
    MediaType::new("video/vnd.iptvforum.2dparityfec-1010", "", &[], true),
    MediaType::new("video/vnd.iptvforum.2dparityfec-2005", "", &[], true),
    MediaType::new("video/vnd.iptvforum.ttsavc", "", &[], true),
    MediaType::new("video/vnd.iptvforum.ttsmpeg2", "", &[], true),
    MediaType::new("video/vnd.motorola.video", "", &[], true),
    MediaType::new("video/vnd.motorola.videop", "", &[], true),
    MediaType::new("video/vnd.mpegurl", "", &["mxu", "m4u"], true),
    MediaType::new("video/vnd.ms-playready.media.pyv", "", &["pyv"], true),
    MediaType::new("video/vnd.mts", "", &[], false),
    MediaType::new("video/vnd.nokia.interleaved-multimedia", "", &[], true),
    MediaType::new("video/vnd.nokia.mp4vr", "", &[], true),
    MediaType::new("video/vnd.nokia.videovoip", "", &[], true),
    MediaType::new("video/vnd.objectvideo", "", &[], true),
    MediaType::new("video/vnd.radgamettools.bink", "", &[], true),
    MediaType::new("video/vnd.radgamettools.smacker", "", &[], true),
    MediaType::new("video/vnd.rn-realvideo", "", &["rv"], false),
    MediaType::new("video/vnd.sealed.mpeg1", "", &[], true),
    MediaType::new("video/vnd.sealed.mpeg4", "", &[], true),
    MediaType::new("video/vnd.sealed.swf", "", &[], true),
    MediaType::new("video/vnd.sealedmedia.softseal.mov", "", &[], true),
    MediaType::new("video/vnd.uvvu.mp4", "", &["uvu", "uvvu"], true),
    MediaType::new("video/vnd.vivo", "", &["viv", "vivo"], true),
    MediaType::new("video/vnd.youtube.yt", "", &[], true),
    MediaType::new("video/vosaic", "", &["vos"], false),
    MediaType::new("video/webm", "", &["webm"], false),
    MediaType::new("video/x-amt-demorun", "", &["xdr"], false),
    MediaType::new("video/x-amt-showrun", "", &["xsr"], false),
    MediaType::new("video/x-atomic3d-feature", "", &["fmf"], false),
    MediaType::new("video/x-dl", "", &["dl"], false),
    MediaType::new("video/x-dv", "", &["dif", "dv"], false),
    MediaType::new("video/x-f4v", "", &["f4v"], false),
    MediaType::new("video/x-fli", "", &["fli"], false),
    MediaType::new("video/x-flv", "", &["flv"], false),
    MediaType::new("video/x-gl", "", &["gl"], false),
    MediaType::new("video/x-isvideo", "", &["isu"], false),
    MediaType::new("video/x-la-asf", "", &["lsf", "lsx"], false),
    MediaType::new("video/x-m4v", "", &["m4v"], false),
    MediaType::new("video/x-matroska", "", &["mkv", "mk3d", "mks"], false),
    MediaType::new("video/x-mng", "", &["mng"], false),
    MediaType::new("video/x-motion-jpeg", "", &["mjpg"], false),
    MediaType::new("video/x-mpeg", "", &["mp2", "mp3"], false),
    MediaType::new("video/x-mpeq2a", "", &["mp2"], false),
    MediaType::new("video/x-ms-asf", "", &["asf", "asx", "asr"], false),
    MediaType::new("video/x-ms-asf-plugin", "", &["asx"], false),
    MediaType::new("video/x-ms-vob", "", &["vob"], false),
    MediaType::new("video/x-ms-wm", "", &["wm"], false),
    MediaType::new("video/x-ms-wmv", "", &["wmv"], false),
    MediaType::new("video/x-ms-wmx", "", &["wmx"], false),
    MediaType::new("video/x-ms-wvx", "", &["wvx"], false),
    MediaType::new("video/x-msvideo", "", &["avi"], false),
    MediaType::new("video/x-qtc", "", &["qtc"], false),
    MediaType::new("video/x-scm", "", &["scm"], false),
    MediaType::new("video/x-sgi-movie", "", &["movie", "mv"], false),
    MediaType::new("video/x-smv", "", &["smv"], false),
    MediaType::new("windows/metafile", "", &["wmf"], false),
    MediaType::new("world/i-vrml", "", &["ivr"], false),
    MediaType::new("world/x-3dmf", "", &["3dm", "3dmf", "qd3", "qd3d"], false),
    MediaType::new("world/x-svr", "", &["svr"], false),
    MediaType::new("world/x-vrml", "", &["vrml", "wrl", "wrz", "flr", "xaf", "xof", "vrm"], false),
    MediaType::new("world/x-vrt", "", &["vrt"], false),
    MediaType::new("www/mime", "", &["mime"], false),
    MediaType::new("x-conference/x-cooltalk", "", &["ice"], false),
    MediaType::new("xgl/drawing", "", &["xgz"], false),
    MediaType::new("xgl/movie", "", &["xmz"], false),
];
