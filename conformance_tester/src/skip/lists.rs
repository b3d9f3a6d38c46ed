//!
//! The default skip list data.
//!

/// Tests which should be fixed.
pub const BROKEN: &[&str] = &[
    "CreateHashCollision", // impossible hash collision on generating address
    "RecursiveCreateContracts",
    "createJS_ExampleContract", // creates an account that already exists
    "CreateCollisionToEmpty",
    "TransactionCollisionToEmptyButCode",
    "TransactionCollisionToEmptyButNonce",
    "RevertDepthCreateAddressCollision", // test case is wrong
    "randomStatetest642",
];

/// Tests skipped due to system specifics / design considerations.
pub const PERMANENT: &[&str] = &[
    "SuicidesMixingCoinbase", // suicides to the coinbase; a block-level run creates the coinbase account
    "static_SuicidesMixingCoinbase",
    "ForkUncle",          // BlockchainTests only, correct behaviour unspecified
    "UncleFromSideChain", // BlockchainTests only, the TD is the same for two different branches
];

/// Tests running slow, run from time to time.
pub const SLOW: &[&str] = &[
    "Call50000",
    "Call50000_ecrec",
    "Call50000_identity",
    "Call50000_identity2",
    "Call50000_sha256",
    "Call50000_rip160",
    "Call50000bytesContract50_1",
    "Call50000bytesContract50_2",
    "Call1MB1024Calldepth",
    "static_Call1MB1024Calldepth",
    "static_Call50000",
    "static_Call50000_ecrec",
    "static_Call50000_identity",
    "static_Call50000_identity2",
    "static_Call50000_sha256",
    "static_Call50000_rip160",
    "static_Call50000bytesContract50_1",
    "static_Call50000bytesContract50_2",
    "static_Callcode50000",
    "static_Return50000",
    "static_Return50000_2",
    "Callcode50000",
    "Return50000",
    "Return50000_2",
    "QuadraticComplexitySolidity_CallDataCopy",
];

/// Tests excluded for the VM suite only: performance loops, plus cases that
/// exercise CALL and CREATE, which VM fixtures do not actually execute.
pub const VM_SPECIFIC: &[&str] = &[
    "loop-mul",
    "loop-add-10M",
    "loop-divadd-10M",
    "loop-divadd-unr100-10M",
    "loop-exp-16b-100k",
    "loop-exp-1b-1M",
    "loop-exp-2b-100k",
    "loop-exp-32b-100k",
    "loop-exp-4b-100k",
    "loop-exp-8b-100k",
    "loop-exp-nop-1M",
    "loop-mulmod-2M",
    "ABAcalls0",
    "ABAcallsSuicide0",
    "ABAcallsSuicide1",
    "sha3_bigSize",
    "CallRecursiveBomb0",
    "CallToNameRegistrator0",
    "CallToPrecompiledContract",
    "CallToReturn1",
    "PostToNameRegistrator0",
    "PostToReturn1",
    "callcodeToNameRegistrator0",
    "callcodeToReturn1",
    "callstatelessToNameRegistrator0",
    "callstatelessToReturn1",
    "createNameRegistrator",
    "randomTest643",
];
